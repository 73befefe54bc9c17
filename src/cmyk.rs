/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::err::ColorError;
use crate::rgb::{Srgb, check_alpha};

/// A color expressed by CMYK ink intensities, each conventionally in
/// 0.0..=1.0.
///
/// CMYK carries four degrees of freedom against the hub's three, so a round
/// trip through sRGB is lossy by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub black: f64,
    pub alpha: f64,
}

impl Cmyk {
    pub fn new(
        cyan: f64,
        magenta: f64,
        yellow: f64,
        black: f64,
        alpha: f64,
    ) -> Result<Self, ColorError> {
        Ok(Cmyk {
            cyan,
            magenta,
            yellow,
            black,
            alpha: check_alpha(alpha)?,
        })
    }

    pub fn to_srgb(&self) -> Srgb {
        let (c, m, y, k) = (self.cyan, self.magenta, self.yellow, self.black);

        Srgb {
            red: 1.0 - (c * (1.0 - k) + k).min(1.0),
            green: 1.0 - (m * (1.0 - k) + k).min(1.0),
            blue: 1.0 - (y * (1.0 - k) + k).min(1.0),
            alpha: self.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ink_is_white() {
        let c = Cmyk::new(0.0, 0.0, 0.0, 0.0, 1.0).unwrap().to_srgb();
        assert_eq!((c.red, c.green, c.blue), (1.0, 1.0, 1.0));
    }

    #[test]
    fn round_trip_is_lossy_for_rich_black() {
        // (0.5, 0.5, 0.5, 0.5) collapses against the sRGB hub; the round
        // trip lands on an equivalent but different ink split.
        let original = Cmyk::new(0.5, 0.5, 0.5, 0.5, 1.0).unwrap();
        let back = original.to_srgb().to_cmyk();
        assert_ne!(original, back);

        // Both still produce the same sRGB color.
        let a = original.to_srgb();
        let b = back.to_srgb();
        assert!((a.red - b.red).abs() < 1e-9);
        assert!((a.green - b.green).abs() < 1e-9);
        assert!((a.blue - b.blue).abs() < 1e-9);
    }
}
