/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::angle::Angle;
use crate::color::Color;
use crate::err::ColorError;

/// A value an expression can produce: a number, an angle or a color.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Angle(Angle),
    Color(Color),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Angle(_) => "angle",
            Value::Color(_) => "color",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Numeric payload, when there is one.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Integer(v) => Some(v as f64),
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric payload of an argument whose declared kind is a number.
    pub fn expect_number(&self) -> Result<f64, ColorError> {
        self.as_number().ok_or_else(|| {
            ColorError::expression(format!("expected a number, got a {}", self.kind_name()), None)
        })
    }

    pub fn expect_angle(&self) -> Result<Angle, ColorError> {
        match self {
            Value::Angle(angle) => Ok(*angle),
            other => Err(ColorError::expression(
                format!("expected an angle, got a {}", other.kind_name()),
                None,
            )),
        }
    }

    pub fn expect_color(&self) -> Result<Color, ColorError> {
        match self {
            Value::Color(color) => Ok(*color),
            other => Err(ColorError::expression(
                format!("expected a color, got a {}", other.kind_name()),
                None,
            )),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<Angle> for Value {
    fn from(angle: Angle) -> Self {
        Value::Angle(angle)
    }
}
