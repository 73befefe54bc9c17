/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::err::ColorError;
use crate::rgb::{Srgb, check_alpha};

/// A color in NTSC YIQ coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yiq {
    pub y: f64,
    pub i: f64,
    pub q: f64,
    pub alpha: f64,
}

impl Yiq {
    pub fn new(y: f64, i: f64, q: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Yiq {
            y,
            i,
            q,
            alpha: check_alpha(alpha)?,
        })
    }

    /// The inverse NTSC matrix; channels outside the sRGB gamut are clamped.
    pub fn to_srgb(&self) -> Srgb {
        let (y, i, q) = (self.y, self.i, self.q);

        Srgb {
            red: (y + 0.9468822170900693 * i + 0.6235565819861433 * q).clamp(0.0, 1.0),
            green: (y - 0.27478764629897834 * i - 0.6356910791873801 * q).clamp(0.0, 1.0),
            blue: (y - 1.1085450346420322 * i + 1.7090069284064666 * q).clamp(0.0, 1.0),
            alpha: self.alpha,
        }
    }
}

/// A color in YUV coordinates.
///
/// YUV is decode-only paperwork for now: there is no defined conversion to
/// the sRGB hub, and asking for one fails with an unsupported-conversion
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yuv {
    pub y: f64,
    pub u: f64,
    pub v: f64,
    pub alpha: f64,
}

impl Yuv {
    pub fn new(y: f64, u: f64, v: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Yuv {
            y,
            u,
            v,
            alpha: check_alpha(alpha)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_round_trip() {
        let original = Srgb::new(0.8, 0.4, 0.2, 1.0).unwrap();
        let back = original.to_yiq().to_srgb();
        assert!((back.red - original.red).abs() < 1e-2);
        assert!((back.green - original.green).abs() < 1e-2);
        assert!((back.blue - original.blue).abs() < 1e-2);
    }

    #[test]
    fn out_of_gamut_is_clamped() {
        let c = Yiq::new(1.0, 0.5, 0.5, 1.0).unwrap().to_srgb();
        assert_eq!(c.red, 1.0);
        assert!(c.green >= 0.0 && c.green <= 1.0);
        assert_eq!(c.blue, 1.0);
    }
}
