// ============================================================================
// Longhand Decimal Arithmetic Library
// Arbitrary-precision signed decimals with schoolbook digit algorithms
// ============================================================================

//! # Longhand
//!
//! Arbitrary-precision signed decimal arithmetic on base-10 digit strings.
//!
//! ## Features
//!
//! - **Exact decimal representation**: sign, least-significant-first digit
//!   string and power-of-ten exponent; no binary rounding in the core
//! - **Schoolbook arithmetic** (add, subtract, multiply) at full precision
//! - **Bounded long division** with a configurable significant-digit
//!   budget and an exactness flag, plus floored modulo
//! - **Trigonometric layer** (sin/cos/tan/csc/sec/cot) over full-precision
//!   decimal range reduction
//! - **Step evaluator** replaying `"+2"`, `"*3"`, `"sin"` style
//!   calculation steps with a pluggable observer
//!
//! ## Example
//!
//! ```rust
//! use longhand::prelude::*;
//!
//! let a: BigDecimal = "2.5".parse().unwrap();
//! let b: BigDecimal = "-1.5".parse().unwrap();
//! let sum = &a + &b;
//! assert_eq!(sum, "1".parse().unwrap());
//! assert_eq!(sum.to_string(), "1.0"); // the aligned scale survives
//!
//! let one: BigDecimal = "1".parse().unwrap();
//! let three: BigDecimal = "3".parse().unwrap();
//! let third = one.div_with_digits(&three, 10).unwrap();
//! assert_eq!(third.value.to_string(), "0.3333333333");
//! assert!(!third.exact);
//! ```

pub mod arithmetic;
pub mod config;
pub mod decimal;
pub mod eval;
pub mod trig;

pub use crate::arithmetic::Quotient;
pub use crate::decimal::{BigDecimal, DecimalError, DecimalResult, ParseDecimalError, SignMode};
pub use crate::eval::{ParseStepError, Step, StepStack};

// Re-exports for convenience
pub mod prelude {
    pub use crate::arithmetic::Quotient;
    pub use crate::decimal::{
        BigDecimal, DecimalError, DecimalResult, ParseDecimalError, SignMode,
    };
    pub use crate::eval::{
        LoggingStepObserver, NoOpStepObserver, ParseStepError, Step, StepObserver, StepStack,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_scientific_round_trip() {
        let value = dec("1.7E+3");
        assert_eq!(value.to_string(), "1.7E+3");
        assert_eq!(value, dec("1700"));
    }

    #[test]
    fn test_signed_addition() {
        let sum = dec("2.5") + dec("-1.5");
        assert_eq!(sum, dec("1"));
        // The addition aligned both operands to one fractional digit.
        assert_eq!(sum.to_string(), "1.0");
    }

    #[test]
    fn test_bounded_division() {
        let third = dec("1").div_with_digits(&dec("3"), 10).unwrap();
        assert_eq!(third.value.to_string(), "0.3333333333");
        assert!(!third.exact);
    }

    #[test]
    fn test_modulo() {
        assert_eq!((dec("10") % dec("3")).to_string(), "1");
    }

    #[test]
    fn test_modulo_identity() {
        for (a, b) in [("10", "3"), ("-7", "3"), ("7", "-3"), ("-7", "-3")] {
            let a = dec(a);
            let b = dec(b);
            let quotient = a.checked_div(&b).unwrap().floor();
            let remainder = a.checked_rem(&b).unwrap();
            assert_eq!(&(&b * &quotient) + &remainder, a);
        }
    }

    #[test]
    fn test_floor_of_negative() {
        assert_eq!(dec("-1.5").floor().to_string(), "-2");
    }

    #[test]
    fn test_sine_of_zero() {
        assert!(dec("0").sin().is_zero());
    }

    #[test]
    fn test_end_to_end_step_run() {
        let mut stack = StepStack::new();
        for text in ["+2", "^10", "/4", "-6"] {
            stack.push(text.parse::<Step>().unwrap());
        }
        assert_eq!(stack.evaluate().unwrap().to_string(), "250");
    }

    #[test]
    fn test_factorial_chain_by_value() {
        // (3.5 * 2)! % 100 = 5040 mod 100
        let mut stack = StepStack::new();
        for text in ["+3.5", "*2", "!", "%100"] {
            stack.push(text.parse::<Step>().unwrap());
        }
        assert_eq!(stack.evaluate().unwrap(), dec("40"));
    }

    #[test]
    fn test_precision_survives_round_trips() {
        let fine = dec("0.00000000000000000000000000125");
        let total = &fine + &dec("1E+20");
        assert_eq!(&total - &dec("1E+20"), fine);
    }
}
