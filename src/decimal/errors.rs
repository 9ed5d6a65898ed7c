// ============================================================================
// Decimal Errors
// Error types for parsing and arbitrary-precision arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing a decimal literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseDecimalError {
    /// No digits in the input (empty string, or only sign/radix point)
    Empty,
    /// A character outside sign, digits, radix point and exponent marker
    InvalidCharacter(char),
    /// More than one radix point in the input
    MultipleRadixPoints,
    /// Exponent suffix has no digits or does not fit the exponent range
    InvalidExponent,
    /// Radix other than 10 requested through the numeric trait surface
    UnsupportedRadix,
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDecimalError::Empty => write!(f, "empty input: no digits to parse"),
            ParseDecimalError::InvalidCharacter(c) => {
                write!(f, "invalid character {c:?} in decimal literal")
            },
            ParseDecimalError::MultipleRadixPoints => {
                write!(f, "more than one radix point in decimal literal")
            },
            ParseDecimalError::InvalidExponent => {
                write!(f, "exponent suffix is missing digits or out of range")
            },
            ParseDecimalError::UnsupportedRadix => {
                write!(f, "only radix 10 is supported")
            },
        }
    }
}

impl std::error::Error for ParseDecimalError {}

/// Errors that can occur during arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Divisor of a division or modulo normalized to zero
    DivisionByZero,
    /// Argument outside an operation's domain, such as a negative or
    /// fractional factorial input or a non-integer power exponent
    InvalidArgument,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::InvalidArgument => {
                write!(f, "argument outside the operation's domain")
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for arithmetic operations
pub type DecimalResult<T> = Result<T, DecimalError>;
