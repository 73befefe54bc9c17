/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::angle::Angle;
use crate::err::ColorError;
use crate::hsl::Hsl;
use crate::rgb::{Srgb, check_alpha};

/// A color expressed by hue, whiteness and blackness, the model behind the
/// natural color (NCol) shorthand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hwb {
    pub hue: Angle,
    pub whiteness: f64,
    pub blackness: f64,
    pub alpha: f64,
}

impl Hwb {
    pub fn new(hue: Angle, whiteness: f64, blackness: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Hwb {
            hue,
            whiteness,
            blackness,
            alpha: check_alpha(alpha)?,
        })
    }

    /// Blends the fully saturated HSL base color with whiteness and
    /// blackness, renormalizing the pair when their sum exceeds 1.
    pub fn to_srgb(&self) -> Srgb {
        let (mut w, mut bl) = (self.whiteness, self.blackness);

        let base = Hsl {
            hue: self.hue,
            saturation: 1.0,
            lightness: 0.5,
            alpha: self.alpha,
        }
        .to_srgb();

        if w + bl > 1.0 {
            let sum = w + bl;
            w /= sum;
            bl /= sum;
        }

        let blend = |channel: f64| channel * (1.0 - w - bl) + w;

        Srgb {
            red: blend(base.red),
            green: blend(base.green),
            blue: blend(base.blue),
            alpha: self.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_white_no_black_is_pure_hue() {
        let c = Hwb::new(Angle::Degrees(120.0), 0.0, 0.0, 1.0).unwrap().to_srgb();
        assert!(c.red.abs() < 1e-9);
        assert!((c.green - 1.0).abs() < 1e-9);
        assert!(c.blue.abs() < 1e-9);
    }

    #[test]
    fn full_whiteness_is_white() {
        let c = Hwb::new(Angle::Degrees(300.0), 1.0, 0.0, 1.0).unwrap().to_srgb();
        assert!((c.red - 1.0).abs() < 1e-9);
        assert!((c.green - 1.0).abs() < 1e-9);
        assert!((c.blue - 1.0).abs() < 1e-9);
    }

    #[test]
    fn oversaturated_mix_renormalizes() {
        // whiteness + blackness > 1 behaves as if scaled back to sum 1.
        let a = Hwb::new(Angle::Degrees(0.0), 1.0, 1.0, 1.0).unwrap().to_srgb();
        let b = Hwb::new(Angle::Degrees(0.0), 0.5, 0.5, 1.0).unwrap().to_srgb();
        assert!((a.red - b.red).abs() < 1e-9);
        assert!((a.green - b.green).abs() < 1e-9);
        assert!((a.blue - b.blue).abs() < 1e-9);
    }
}
