/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::angle::Angle;
use crate::err::ColorError;
use crate::rgb::check_alpha;
use pxfm::{f_atan2, f_cos, f_sin};

/// A color in CIELAB cartesian coordinates.
///
/// Lightness is conventionally 0.0..=100.0; `a` and `b` are unbounded
/// chromatic axes. There is no sRGB conversion: asking for one is an
/// [`ColorError::UnsupportedConversion`] error, never an approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

/// A color in CIELAB polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: Angle,
    pub alpha: f64,
}

impl Lab {
    pub fn new(lightness: f64, a: f64, b: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Lab {
            lightness,
            a,
            b,
            alpha: check_alpha(alpha)?,
        })
    }

    /// The exact cartesian-to-polar transform; no information is lost.
    pub fn to_lch(&self) -> Lch {
        Lch {
            lightness: self.lightness,
            chroma: (self.a * self.a + self.b * self.b).sqrt(),
            hue: Angle::Radians(f_atan2(self.b, self.a)),
            alpha: self.alpha,
        }
    }
}

impl Lch {
    pub fn new(lightness: f64, chroma: f64, hue: Angle, alpha: f64) -> Result<Self, ColorError> {
        Ok(Lch {
            lightness,
            chroma,
            hue,
            alpha: check_alpha(alpha)?,
        })
    }

    /// The exact polar-to-cartesian transform; no information is lost.
    pub fn to_lab(&self) -> Lab {
        let hue = self.hue.to_radians().value();
        Lab {
            lightness: self.lightness,
            a: self.chroma * f_cos(hue),
            b: self.chroma * f_sin(hue),
            alpha: self.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_round_trip_is_exact() {
        let lab = Lab::new(52.0, 40.0, -60.0, 1.0).unwrap();
        let back = lab.to_lch().to_lab();
        assert!((back.lightness - lab.lightness).abs() < 1e-9);
        assert!((back.a - lab.a).abs() < 1e-9);
        assert!((back.b - lab.b).abs() < 1e-9);
    }

    #[test]
    fn axis_aligned_hues() {
        let lch = Lab::new(50.0, 10.0, 0.0, 1.0).unwrap().to_lch();
        assert!((lch.chroma - 10.0).abs() < 1e-12);
        assert!(lch.hue.to_radians().value().abs() < 1e-12);

        let lch = Lab::new(50.0, 0.0, 25.0, 1.0).unwrap().to_lch();
        assert!((lch.chroma - 25.0).abs() < 1e-12);
        assert!((lch.hue.to_radians().value() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn alpha_is_carried() {
        let lch = Lab::new(50.0, 1.0, 2.0, 0.25).unwrap().to_lch();
        assert_eq!(lch.alpha, 0.25);
        assert_eq!(lch.to_lab().alpha, 0.25);
    }
}
