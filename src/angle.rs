/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::err::ColorError;
use crate::value::Value;
use std::f64::consts::TAU;

/// An angle expressed in one of the four CSS angle units.
///
/// The magnitude is not reduced at construction: `Angle::Degrees(721.0)` is
/// a valid angle distinct from `Angle::Degrees(1.0)` until
/// [`Angle::to_principal`] is called.
#[derive(Debug, Clone, Copy)]
pub enum Angle {
    Degrees(f64),
    Gradians(f64),
    Radians(f64),
    Turns(f64),
}

impl Angle {
    /// The magnitude in the angle's own unit.
    pub const fn value(&self) -> f64 {
        match *self {
            Angle::Degrees(v) | Angle::Gradians(v) | Angle::Radians(v) | Angle::Turns(v) => v,
        }
    }

    /// One full revolution in the angle's own unit.
    const fn full_turn(&self) -> f64 {
        match self {
            Angle::Degrees(_) => 360.0,
            Angle::Gradians(_) => 400.0,
            Angle::Radians(_) => TAU,
            Angle::Turns(_) => 1.0,
        }
    }

    /// The magnitude expressed in turns.
    pub const fn turns(&self) -> f64 {
        self.value() / self.full_turn()
    }

    pub const fn to_degrees(&self) -> Angle {
        Angle::Degrees(self.turns() * 360.0)
    }

    pub const fn to_gradians(&self) -> Angle {
        Angle::Gradians(self.turns() * 400.0)
    }

    pub const fn to_radians(&self) -> Angle {
        Angle::Radians(self.turns() * TAU)
    }

    pub const fn to_turns(&self) -> Angle {
        Angle::Turns(self.turns())
    }

    /// Reduces the magnitude into the unit's canonical range, in the native
    /// unit, keeping the variant.
    pub fn to_principal(&self) -> Angle {
        let reduced = self.value().rem_euclid(self.full_turn());
        match self {
            Angle::Degrees(_) => Angle::Degrees(reduced),
            Angle::Gradians(_) => Angle::Gradians(reduced),
            Angle::Radians(_) => Angle::Radians(reduced),
            Angle::Turns(_) => Angle::Turns(reduced),
        }
    }

    /// Decodes an expression that must produce exactly one angle.
    ///
    /// Bare numbers at the top level are read as degrees.
    pub fn from_text(expr: &str) -> Result<Angle, ColorError> {
        let decoder = crate::builtin::default_decoder()?;
        let results = decoder.decode(expr, false, true)?;
        match results.as_slice() {
            [Value::Angle(angle)] => Ok(*angle),
            _ => Err(ColorError::expression(
                format!("expression did not produce a single angle: '{expr}'"),
                None,
            )),
        }
    }
}

impl PartialEq for Angle {
    /// Compares magnitudes normalized to turns and rounded to 6 decimals.
    fn eq(&self, other: &Self) -> bool {
        let normalize = |angle: &Angle| (angle.turns() * 1e6).round() / 1e6;
        normalize(self) == normalize(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn in_unit(angle: Angle, unit: usize) -> Angle {
        match unit {
            0 => angle.to_degrees(),
            1 => angle.to_gradians(),
            2 => angle.to_radians(),
            _ => angle.to_turns(),
        }
    }

    #[test]
    fn quarter_turn_across_units() {
        let angle = Angle::Degrees(90.0);
        assert_eq!(angle.to_gradians().value(), 100.0);
        assert_eq!(angle.to_turns().value(), 0.25);
        assert!((angle.to_radians().value() - TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn pairwise_round_trips() {
        let mut rng = rand::rng();
        for _ in 0..256 {
            let degrees: f64 = rng.random_range(-720.0..720.0);
            let origin = Angle::Degrees(degrees);
            for unit in 0..4 {
                let there = in_unit(origin, unit);
                let back = there.to_degrees();
                assert!(
                    (back.value() - degrees).abs() < 1e-9,
                    "unit {unit}: {degrees} -> {} -> {}",
                    there.value(),
                    back.value()
                );
            }
        }
    }

    #[test]
    fn principal_reduces_in_native_unit() {
        assert_eq!(Angle::Degrees(721.0).to_principal().value(), 1.0);
        assert_eq!(Angle::Gradians(-40.0).to_principal().value(), 360.0);
        assert_eq!(Angle::Turns(2.5).to_principal().value(), 0.5);
    }

    #[test]
    fn from_text_reads_units_and_bare_numbers() {
        assert_eq!(Angle::from_text("0.5turn").unwrap(), Angle::Turns(0.5));
        // Bare numbers at the top level become degrees.
        assert_eq!(Angle::from_text("90").unwrap(), Angle::Degrees(90.0));
        assert!(Angle::from_text("#ff0000").is_err());
    }

    #[test]
    fn equality_normalizes_to_turns() {
        assert_eq!(Angle::Degrees(180.0), Angle::Turns(0.5));
        assert_eq!(Angle::Gradians(200.0), Angle::Radians(TAU / 2.0));
        assert_ne!(Angle::Degrees(180.0), Angle::Degrees(540.0));
    }
}
