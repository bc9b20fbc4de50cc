//! Error types for coordinate conversion
//!
//! Every failure of the core is reported through [`ConvertError`]; nothing in
//! the conversion path panics on bad input.

use std::num::ParseFloatError;
use thiserror::Error;

use crate::constants::{PRECISION_MAX, PRECISION_MIN};

/// Main error type for coordconv
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    /// A text field could not be parsed as a real number
    #[error("Invalid value for {field}: {input:?} ({source})")]
    InvalidNumericInput {
        /// Label of the offending field
        field: String,
        /// The raw text that was entered
        input: String,
        /// The underlying parse complaint
        source: ParseFloatError,
    },

    /// Cartesian to spherical conversion of the origin
    #[error("Division by zero: the radius is zero, so the polar angle φ is undefined")]
    DivisionByZero,

    /// The selector does not name any of the six conversions
    #[error("Unknown conversion mode: {0}")]
    UnknownMode(String),

    /// Precision outside the supported range
    #[error("Precision {0} is out of range ({min}..={max})", min = PRECISION_MIN, max = PRECISION_MAX)]
    InvalidPrecision(i64),
}

/// Result type for coordconv operations
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_carries_parse_error() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = ConvertError::InvalidNumericInput {
            field: "x".to_string(),
            input: "abc".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("Invalid value for x: \"abc\""));
        assert!(message.contains("invalid float literal"));
    }

    #[test]
    fn test_precision_message_names_bounds() {
        let err = ConvertError::InvalidPrecision(11);
        assert_eq!(err.to_string(), "Precision 11 is out of range (1..=10)");
    }
}
