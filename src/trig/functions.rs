// ============================================================================
// Trigonometric Functions
// Decimal range reduction, f64 Taylor summation, decimal truncation
// ============================================================================

use crate::decimal::{BigDecimal, DecimalResult};
use crate::trig::constants::{HALF_PI, TAYLOR_TERMS, TRIG_DIGITS, TWO_PI};
use num_traits::{FromPrimitive, ToPrimitive};

impl BigDecimal {
    /// Sine of an angle in radians, truncated to ten significant digits.
    ///
    /// The angle is range-reduced into `[0, 2π)` with full-precision
    /// decimal modulo, then the alternating Taylor series is summed in
    /// `f64`. Summing in `f64` caps the attainable precision near 1e-15,
    /// well inside the ten digits kept; in exchange the series costs a
    /// handful of float operations instead of twenty decimal divisions.
    ///
    /// # Example
    /// ```
    /// use longhand::BigDecimal;
    ///
    /// let one: BigDecimal = "1".parse().unwrap();
    /// assert_eq!(one.sin().to_string(), "0.8414709848");
    /// ```
    pub fn sin(&self) -> Self {
        let reduced = if self.is_negative() || self > &*TWO_PI {
            self.checked_rem(&TWO_PI).expect("two pi is nonzero")
        } else {
            self.clone()
        };
        let theta = reduced
            .to_f64()
            .expect("reduced angle is within [0, two pi)");

        let theta_sq = theta * theta;
        let mut power = theta; // theta^(2r+1)
        let mut factorial = 1.0; // (2r+1)!
        let mut sum = 0.0;
        for r in 0..TAYLOR_TERMS {
            let term = power / factorial;
            if r % 2 == 0 {
                sum += term;
            } else {
                sum -= term;
            }
            let next_odd = f64::from(2 * r + 3);
            power *= theta_sq;
            factorial *= next_odd * (next_odd - 1.0);
        }

        Self::from_f64(sum)
            .expect("series sum over a reduced angle is finite")
            .trunc_digits(TRIG_DIGITS)
    }

    /// Cosine via the identity `cos(x) = sin(x + π/2)`; the shift is
    /// full-precision decimal addition.
    pub fn cos(&self) -> Self {
        (self + &*HALF_PI).sin()
    }

    /// Tangent as `sin / cos` at the configured division budget.
    ///
    /// # Errors
    /// [`DecimalError::DivisionByZero`](crate::decimal::DecimalError) when
    /// the cosine comes out exactly zero.
    pub fn tan(&self) -> DecimalResult<Self> {
        self.sin().checked_div(&self.cos())
    }

    /// Cosecant, the reciprocal of sine.
    ///
    /// # Errors
    /// [`DecimalError::DivisionByZero`](crate::decimal::DecimalError) at
    /// angles whose sine is zero.
    pub fn csc(&self) -> DecimalResult<Self> {
        self.sin().powi(-1)
    }

    /// Secant, the reciprocal of cosine.
    ///
    /// # Errors
    /// [`DecimalError::DivisionByZero`](crate::decimal::DecimalError) at
    /// angles whose cosine is zero.
    pub fn sec(&self) -> DecimalResult<Self> {
        self.cos().powi(-1)
    }

    /// Cotangent, the reciprocal of tangent.
    ///
    /// # Errors
    /// [`DecimalError::DivisionByZero`](crate::decimal::DecimalError) at
    /// angles whose tangent is zero or undefined.
    pub fn cot(&self) -> DecimalResult<Self> {
        self.tan()?.powi(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::DecimalError;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    fn assert_close(value: &BigDecimal, expected: f64) {
        let got = value.to_f64().unwrap();
        assert!(
            (got - expected).abs() < 1e-9,
            "got {got}, expected {expected}"
        );
    }

    #[test]
    fn test_sin_zero_is_exact_zero() {
        let result = dec("0").sin();
        assert!(result.is_zero());
        assert_eq!(result.to_string(), "0");
    }

    #[test]
    fn test_sin_known_angles() {
        assert_eq!(dec("1").sin().to_string(), "0.8414709848");
        assert_eq!(dec("0.5").sin().to_string(), "0.4794255386");
    }

    #[test]
    fn test_sin_negative_angle_reduces() {
        assert_close(&dec("-1").sin(), -0.8414709848078965);
        assert_close(&dec("-0.5").sin(), -0.479425538604203);
    }

    #[test]
    fn test_sin_large_angle_reduces() {
        assert_close(&dec("7").sin(), 0.6569865987187891);
        assert_close(&dec("100").sin(), -0.5063656411097588);
    }

    #[test]
    fn test_sin_at_pi_is_tiny() {
        let at_pi = crate::trig::PI.sin();
        assert_close(&at_pi, 0.0);
    }

    #[test]
    fn test_sin_huge_angle_stays_reduced() {
        // The reduction must land inside [0, 2π) even when the angle
        // spans far more digits than the division budget.
        let huge = dec("1E+200");
        let reduced = huge.checked_rem(&TWO_PI).unwrap();
        assert!(!reduced.is_negative());
        assert!(reduced < *TWO_PI);

        let result = huge.sin();
        assert!(result.abs() <= dec("1"));
        assert_eq!(result, reduced.sin());

        assert!(dec("-1E+200").sin().abs() <= dec("1"));
        assert!(dec("1E+200").cos().abs() <= dec("1"));
    }

    #[test]
    fn test_sin_keeps_ten_digits() {
        assert!(dec("1").sin().digit_count() <= 10);
        assert!(dec("2.5").sin().digit_count() <= 10);
    }

    #[test]
    fn test_cos() {
        assert_close(&dec("0").cos(), 1.0);
        assert_close(&dec("1").cos(), 0.5403023058681398);
        assert_close(&crate::trig::PI.cos(), -1.0);
    }

    #[test]
    fn test_tan() {
        let result = dec("1").tan().unwrap();
        assert_close(&result, 1.557407724654902);
        assert!(dec("0").tan().unwrap().is_zero());
    }

    #[test]
    fn test_reciprocal_functions() {
        assert_close(&dec("1").csc().unwrap(), 1.1883951057781212);
        assert_close(&dec("1").sec().unwrap(), 1.8508157176809255);
        assert_close(&dec("1").cot().unwrap(), 0.6420926159343306);
    }

    #[test]
    fn test_csc_of_zero_fails() {
        assert_eq!(dec("0").csc(), Err(DecimalError::DivisionByZero));
        assert_eq!(dec("0").cot(), Err(DecimalError::DivisionByZero));
    }
}
