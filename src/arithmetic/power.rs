// ============================================================================
// Integer Power and Factorial
// ============================================================================

use crate::decimal::{BigDecimal, DecimalError, DecimalResult};

impl BigDecimal {
    /// Raises to an integer power by repeated multiplication. Negative
    /// exponents take the reciprocal at the configured division budget.
    /// `x^0 = 1` for every `x`, including zero.
    ///
    /// # Errors
    /// [`DecimalError::DivisionByZero`] for `0` raised to a negative power.
    ///
    /// # Example
    /// ```
    /// use longhand::BigDecimal;
    ///
    /// let two: BigDecimal = "2".parse().unwrap();
    /// assert_eq!(two.powi(-2).unwrap().to_string(), "0.25");
    /// ```
    pub fn powi(&self, exponent: i32) -> DecimalResult<Self> {
        let mut result = Self::one();
        for _ in 0..exponent.unsigned_abs() {
            result = &result * self;
        }
        if exponent < 0 {
            result = Self::one().checked_div(&result)?;
        }
        Ok(result)
    }

    /// Factorial of a non-negative integer, as a descending product. Cost
    /// is linear in the argument's value.
    ///
    /// # Errors
    /// [`DecimalError::InvalidArgument`] for negative or non-integer
    /// values.
    pub fn factorial(&self) -> DecimalResult<Self> {
        if self.is_negative() || !self.is_integer() {
            return Err(DecimalError::InvalidArgument);
        }
        let one = Self::one();
        let mut result = Self::one();
        let mut k = self.clone();
        while !k.is_zero() {
            result = &result * &k;
            k = &k - &one;
        }
        Ok(result)
    }
}
