/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::angle::Angle;
use crate::err::ColorError;
use crate::rgb::{Srgb, check_alpha};

/// A color expressed by hue, saturation and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: Angle,
    pub saturation: f64,
    pub value: f64,
    pub alpha: f64,
}

impl Hsv {
    pub fn new(hue: Angle, saturation: f64, value: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Hsv {
            hue,
            saturation,
            value,
            alpha: check_alpha(alpha)?,
        })
    }

    /// The six-sector conversion with fractional hue interpolation.
    pub fn to_srgb(&self) -> Srgb {
        let (saturation, value) = (self.saturation, self.value);

        let (r, g, b);
        if saturation == 0.0 {
            r = value;
            g = value;
            b = value;
        } else {
            let sector = self.hue.turns() * 6.0;
            let f = sector - sector.trunc();
            let i = (sector.trunc() as i64).rem_euclid(6);

            let p = value * (1.0 - saturation);
            let q = value * (1.0 - saturation * f);
            let t = value * (1.0 - saturation * (1.0 - f));

            (r, g, b) = match i {
                0 => (value, t, p),
                1 => (q, value, p),
                2 => (p, value, t),
                3 => (p, q, value),
                4 => (t, p, value),
                _ => (value, p, q),
            };
        }

        Srgb {
            red: r,
            green: g,
            blue: b,
            alpha: self.alpha,
        }
    }
}
