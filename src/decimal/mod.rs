// ============================================================================
// Decimal Module
// Arbitrary-precision signed decimal value type
//
// This module provides:
// - BigDecimal: sign, base-10 digit array (least-significant first) and
//   decimal exponent, kept normalized
// - Parsing and formatting that round-trip the stored representation
// - Ordering, equality and hashing that agree with each other
// - Conversions to and from primitives and rust_decimal
//
// Design principles:
// - Exact: no hidden rounding; only division and the trig layer truncate
// - Canonical zero: empty digits, exponent 0, non-negative sign
// - Trailing zeros are significant for formatting, never for comparison
// ============================================================================

mod convert;
mod errors;
mod format;
mod parse;
mod value;

#[cfg(feature = "serde")]
mod serde_support;

pub use errors::{DecimalError, DecimalResult, ParseDecimalError};
pub use format::SignMode;
pub use value::BigDecimal;

pub(crate) use value::DigitBuf;
