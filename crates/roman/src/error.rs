//! Error type shared by the decoder, encoder and comparator.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RomanError>;

/// Failures detected at the point of invalid input. No partial results are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RomanError {
    /// A numeral was required but none was supplied.
    #[error("numeral input is absent")]
    NullInput,

    /// The numeral string has zero characters.
    #[error("numeral string cannot be empty")]
    EmptyInput,

    /// The character is not one of `IVXLCDM` (either case).
    #[error("'{0}' is not a valid roman numeral")]
    InvalidSymbol(char),

    /// Integer argument outside the representable range.
    #[error("{value} is out of range; roman numerals cover {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl RomanError {
    pub fn out_of_range(value: impl Into<i64>) -> Self {
        Self::OutOfRange {
            value: value.into(),
            min: i64::from(crate::numeral::MIN_VALUE),
            max: i64::from(crate::numeral::MAX_VALUE),
        }
    }
}
