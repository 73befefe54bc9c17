/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::angle::Angle;
use crate::err::ColorError;
use crate::rgb::{Srgb, check_alpha};

/// A color expressed by hue, saturation and lightness.
///
/// Saturation and lightness conventionally live in 0.0..=1.0; only alpha is
/// range-checked at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: Angle,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsl {
    pub fn new(hue: Angle, saturation: f64, lightness: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Hsl {
            hue,
            saturation,
            lightness,
            alpha: check_alpha(alpha)?,
        })
    }

    /// The same color with another lightness.
    pub fn with_lightness(&self, lightness: f64) -> Hsl {
        Hsl { lightness, ..*self }
    }

    /// The same color with another saturation.
    pub fn with_saturation(&self, saturation: f64) -> Hsl {
        Hsl { saturation, ..*self }
    }

    /// The classical hue-sector piecewise-linear conversion.
    pub fn to_srgb(&self) -> Srgb {
        let (s, l) = (self.saturation, self.lightness);

        if s == 0.0 {
            // Achromatic.
            return Srgb {
                red: l,
                green: l,
                blue: l,
                alpha: self.alpha,
            };
        }

        fn hue_to_rgb(t1: f64, t2: f64, hue: f64) -> f64 {
            let hue = hue.rem_euclid(6.0);
            if hue < 1.0 {
                t1 + (t2 - t1) * hue
            } else if hue < 3.0 {
                t2
            } else if hue < 4.0 {
                t1 + (t2 - t1) * (4.0 - hue)
            } else {
                t1
            }
        }

        let hue = self.hue.to_degrees().value().rem_euclid(360.0) / 60.0;
        let t2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let t1 = l * 2.0 - t2;

        Srgb {
            red: hue_to_rgb(t1, t2, hue + 2.0),
            green: hue_to_rgb(t1, t2, hue),
            blue: hue_to_rgb(t1, t2, hue - 2.0),
            alpha: self.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        let red = Hsl::new(Angle::Degrees(0.0), 1.0, 0.5, 1.0).unwrap().to_srgb();
        assert!((red.red - 1.0).abs() < 1e-9);
        assert!(red.green.abs() < 1e-9);
        assert!(red.blue.abs() < 1e-9);

        let green = Hsl::new(Angle::Degrees(120.0), 1.0, 0.5, 1.0)
            .unwrap()
            .to_srgb();
        assert!(green.red.abs() < 1e-9);
        assert!((green.green - 1.0).abs() < 1e-9);

        let blue = Hsl::new(Angle::Degrees(240.0), 1.0, 0.5, 1.0)
            .unwrap()
            .to_srgb();
        assert!((blue.blue - 1.0).abs() < 1e-9);
    }

    #[test]
    fn achromatic_uses_lightness() {
        let gray = Hsl::new(Angle::Degrees(123.0), 0.0, 0.25, 0.5)
            .unwrap()
            .to_srgb();
        assert_eq!((gray.red, gray.green, gray.blue), (0.25, 0.25, 0.25));
        assert_eq!(gray.alpha, 0.5);
    }

    #[test]
    fn hue_wraps_around() {
        let a = Hsl::new(Angle::Degrees(390.0), 1.0, 0.5, 1.0).unwrap().to_srgb();
        let b = Hsl::new(Angle::Degrees(30.0), 1.0, 0.5, 1.0).unwrap().to_srgb();
        assert_eq!(a, b);
    }
}
