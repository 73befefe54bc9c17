/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while decoding or converting colors.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A syntax or evaluation error in a color expression, with the source
    /// column and the enclosing function name when they are known.
    Expression {
        message: String,
        column: Option<usize>,
        function: Option<String>,
    },
    /// The requested conversion has no defined formula.
    UnsupportedConversion {
        from: &'static str,
        to: &'static str,
    },
    /// A channel value was outside its legal range at construction.
    InvalidChannel {
        channel: &'static str,
        min: f64,
        max: f64,
    },
}

impl ColorError {
    pub(crate) fn expression(message: impl Into<String>, column: Option<usize>) -> Self {
        ColorError::Expression {
            message: message.into(),
            column,
            function: None,
        }
    }

    pub(crate) fn in_function(
        message: impl Into<String>,
        column: Option<usize>,
        function: Option<&str>,
    ) -> Self {
        ColorError::Expression {
            message: message.into(),
            column,
            function: function.map(str::to_owned),
        }
    }

    pub(crate) fn unsupported(from: &'static str, to: &'static str) -> Self {
        ColorError::UnsupportedConversion { from, to }
    }

    pub(crate) fn channel(channel: &'static str, min: f64, max: f64) -> Self {
        ColorError::InvalidChannel { channel, min, max }
    }
}

impl Display for ColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::Expression {
                message,
                column,
                function,
            } => {
                f.write_str(message)?;
                if let Some(column) = column {
                    write!(f, " at column {column}")?;
                }
                if let Some(function) = function {
                    write!(f, " in function '{function}'")?;
                }
                Ok(())
            }
            ColorError::UnsupportedConversion { from, to } => {
                write!(f, "conversion from {from} to {to} is not supported")
            }
            ColorError::InvalidChannel { channel, min, max } => {
                write!(f, "{channel} should be between {min} and {max}")
            }
        }
    }
}

impl Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_rendering() {
        let err = ColorError::in_function("unknown value 'foo'", Some(4), Some("rgb"));
        assert_eq!(
            err.to_string(),
            "unknown value 'foo' at column 4 in function 'rgb'"
        );
    }

    #[test]
    fn channel_rendering() {
        let err = ColorError::channel("alpha", 0.0, 1.0);
        assert_eq!(err.to_string(), "alpha should be between 0 and 1");
    }
}
