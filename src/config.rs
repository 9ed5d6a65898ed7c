// ============================================================================
// Process-wide Defaults
// ============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Significant-digit budget used by divisions that do not pass one
/// explicitly.
pub const DEFAULT_DIVISION_DIGITS: usize = 100;

static DIVISION_DIGITS: AtomicUsize = AtomicUsize::new(DEFAULT_DIVISION_DIGITS);

/// Current process-wide division budget.
#[inline]
pub fn division_digits() -> usize {
    DIVISION_DIGITS.load(Ordering::Relaxed)
}

/// Replaces the process-wide division budget. Intended as a set-once
/// startup knob; divisions already in flight keep the budget they read.
/// A zero budget makes every bounded division return an inexact zero.
pub fn set_division_digits(digits: usize) {
    DIVISION_DIGITS.store(digits, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::BigDecimal;

    // The budget is process state shared with every other test thread, so
    // this single test covers the whole set/read/divide cycle and only
    // ever widens the budget before restoring it.
    #[test]
    fn test_division_digits_roundtrip() {
        let one: BigDecimal = "1".parse().unwrap();
        let three: BigDecimal = "3".parse().unwrap();

        assert_eq!(division_digits(), DEFAULT_DIVISION_DIGITS);
        let at_default = one.div_full(&three).unwrap();
        assert_eq!(at_default.value.digit_count(), DEFAULT_DIVISION_DIGITS);
        assert!(!at_default.exact);

        set_division_digits(120);
        assert_eq!(division_digits(), 120);
        assert_eq!(one.div_full(&three).unwrap().value.digit_count(), 120);

        set_division_digits(DEFAULT_DIVISION_DIGITS);
        assert_eq!(division_digits(), DEFAULT_DIVISION_DIGITS);
    }
}
