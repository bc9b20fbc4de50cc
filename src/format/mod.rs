//! Fixed-point rendering of conversion results

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::constants::{PRECISION_DEFAULT, PRECISION_MAX, PRECISION_MIN};
use crate::error::{ConvertError, Result};

/// Renders `value` with exactly `precision` digits after the decimal point
///
/// Rounding follows Rust's fixed-point formatting of the exact binary value
/// (ties to even). Precision 0 drops the decimal point entirely. NaN and
/// infinities render as `NaN`, `inf` and `-inf`.
///
/// ```rust
/// use coordconv::format_number;
///
/// assert_eq!(format_number(3.14159, 2), "3.14");
/// assert_eq!(format_number(2.0, 0), "2");
/// ```
pub fn format_number<T: Float + fmt::Display>(value: T, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Number of decimals in rendered output, always within 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Precision(u8);

impl Precision {
    /// Smallest supported precision
    pub const MIN: Precision = Precision(PRECISION_MIN);
    /// Largest supported precision
    pub const MAX: Precision = Precision(PRECISION_MAX);

    /// Creates a precision, rejecting values outside 1..=10
    pub fn new(digits: i64) -> Result<Self> {
        if (PRECISION_MIN as i64..=PRECISION_MAX as i64).contains(&digits) {
            Ok(Precision(digits as u8))
        } else {
            Err(ConvertError::InvalidPrecision(digits))
        }
    }

    /// Number of decimal digits
    pub fn digits(self) -> usize {
        self.0 as usize
    }

    /// One more digit, stopping at the maximum
    pub fn increment(self) -> Self {
        Precision(self.0.saturating_add(1).min(PRECISION_MAX))
    }

    /// One fewer digit, stopping at the minimum
    pub fn decrement(self) -> Self {
        Precision(self.0.saturating_sub(1).max(PRECISION_MIN))
    }

    /// Renders `value` at this precision
    pub fn format(self, value: f64) -> String {
        format_number(value, self.digits())
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(PRECISION_DEFAULT)
    }
}

impl TryFrom<i64> for Precision {
    type Error = ConvertError;

    fn try_from(digits: i64) -> Result<Self> {
        Precision::new(digits)
    }
}

impl From<Precision> for u8 {
    fn from(p: Precision) -> Self {
        p.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rounds_to_precision() {
        assert_eq!(format_number(3.14159, 2), "3.14");
        assert_eq!(format_number(2.0, 0), "2");
        assert_eq!(format_number(2.0, 3), "2.000");
        assert_eq!(format_number(-1.23456, 4), "-1.2346");
        assert_eq!(format_number(1.0f32, 1), "1.0");
    }

    #[test]
    fn test_format_pads_every_digit() {
        let text = format_number(1.0 / 3.0, 10);
        assert_eq!(text, "0.3333333333");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN, 2), "NaN");
        assert_eq!(format_number(f64::INFINITY, 2), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY, 2), "-inf");
    }

    #[test]
    fn test_precision_bounds() {
        assert!(Precision::new(1).is_ok());
        assert!(Precision::new(10).is_ok());
        assert_eq!(Precision::new(0), Err(ConvertError::InvalidPrecision(0)));
        assert_eq!(Precision::new(11), Err(ConvertError::InvalidPrecision(11)));
        assert_eq!(Precision::new(-3), Err(ConvertError::InvalidPrecision(-3)));
    }

    #[test]
    fn test_precision_stepper_is_clamped() {
        assert_eq!(Precision::MAX.increment(), Precision::MAX);
        assert_eq!(Precision::MIN.decrement(), Precision::MIN);
        let p = Precision::default();
        assert_eq!(p.digits(), 2);
        assert_eq!(p.increment().digits(), 3);
        assert_eq!(p.decrement().digits(), 1);
    }

    #[test]
    fn test_precision_serde() {
        let p: Precision = serde_json::from_str("4").unwrap();
        assert_eq!(p.digits(), 4);
        assert_eq!(serde_json::to_string(&p).unwrap(), "4");
        assert!(serde_json::from_str::<Precision>("42").is_err());
    }
}
