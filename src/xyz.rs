/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::err::ColorError;
use crate::rgb::check_alpha;

/// A color in CIEXYZ coordinates, each component conventionally in
/// 0.0..=1.0.
///
/// XYZ is a carrier representation only: it has no defined conversion to or
/// from the sRGB hub here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub alpha: f64,
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Xyz {
            x,
            y,
            z,
            alpha: check_alpha(alpha)?,
        })
    }
}
