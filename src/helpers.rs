/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use num_traits::Float;

use crate::value::Value;

/// Turns a numeric argument into a 0..1 channel factor.
///
/// Integers scale against `max` (a percentage against 100, a channel byte
/// against 255), while floats are taken as ready factors, percentage tokens
/// included since those already decode to fractions.
pub(crate) fn factor(value: &Value, max: f64, clip: bool) -> f64 {
    let v = match value {
        Value::Integer(i) => *i as f64 / max,
        Value::Float(f) => *f,
        // Argument kinds are checked before dispatch.
        Value::Angle(_) | Value::Color(_) => f64::NAN,
    };
    if clip { v.clamp(0.0, 1.0) } else { v }
}

/// Rounds to `digits` decimal places with ties away from zero.
///
/// CSS text output requires half-up rounding, which differs from the
/// round-to-even tie breaking a bare float format would apply.
pub(crate) fn round_half_up<T: Float>(value: T, digits: i32) -> T {
    let scale = T::from(10i32).unwrap().powi(digits);
    let half = T::from(0.5f64).unwrap();
    let rounded = (value.abs() * scale + half).floor() / scale;
    if value.is_sign_negative() { -rounded } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_half_up(0.5f64, 0), 1.0);
        assert_eq!(round_half_up(1.5f64, 0), 2.0);
        assert_eq!(round_half_up(2.5f64, 0), 3.0);
        assert_eq!(round_half_up(-0.5f64, 0), -1.0);
        assert_eq!(round_half_up(0.125f64, 2), 0.13);
    }

    #[test]
    fn plain_values_unchanged() {
        assert_eq!(round_half_up(0.25f64, 2), 0.25);
        assert_eq!(round_half_up(12.0f64, 3), 12.0);
    }

    #[test]
    fn integer_factors_scale_floats_pass() {
        assert_eq!(factor(&Value::Integer(128), 255.0, true), 128.0 / 255.0);
        assert_eq!(factor(&Value::Integer(50), 100.0, false), 0.5);
        assert_eq!(factor(&Value::Float(0.5), 255.0, false), 0.5);
        assert_eq!(factor(&Value::Integer(400), 255.0, true), 1.0);
        assert_eq!(factor(&Value::Float(-0.5), 100.0, true), 0.0);
    }
}
