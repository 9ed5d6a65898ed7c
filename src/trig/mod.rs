// ============================================================================
// Transcendental Layer
// ============================================================================
//
// This module provides:
// - Shared π constants at 50 significant digits
// - sin/cos with decimal range reduction and an f64 Taylor core
// - tan/csc/sec/cot derived through division and reciprocals
//
// Results carry ten significant digits; see `BigDecimal::sin` for the
// precision trade-off behind that figure.

mod constants;
mod functions;

pub use constants::{HALF_PI, PI, TWO_PI};
