// ============================================================================
// Rounding family
// Fractional split, floor/ceil and significant-digit truncation
// ============================================================================

use crate::decimal::{BigDecimal, DigitBuf};

impl BigDecimal {
    /// The digits strictly below position zero, keeping the sign.
    /// `12.345` yields `0.345`, `-1.5` yields `-0.5`, integers yield zero.
    pub fn fractional_part(&self) -> Self {
        if self.exponent >= 0 {
            return Self::zero();
        }
        let below_point = ((-self.exponent) as usize).min(self.digits.len());
        let fraction = DigitBuf::from_slice(&self.digits[..below_point]);
        Self::from_parts(self.sign, fraction, self.exponent)
    }

    /// Largest integer not above `self`.
    ///
    /// Subtracts the fractional part, then one more when the value was
    /// negative with a nonzero fraction.
    ///
    /// # Example
    /// ```
    /// use longhand::BigDecimal;
    ///
    /// let value: BigDecimal = "-1.5".parse().unwrap();
    /// assert_eq!(value.floor().to_string(), "-2");
    /// ```
    pub fn floor(&self) -> Self {
        let fraction = self.fractional_part();
        let mut result = self - &fraction;
        // The subtraction leaves zeroed fractional positions behind; fold
        // them into the exponent so integers print without a radix point.
        while result.exponent < 0 && result.digits.first() == Some(&0) {
            result.digits.remove(0);
            result.exponent += 1;
        }
        if self.is_negative() && !fraction.is_zero() {
            result = &result - &Self::one();
        }
        result
    }

    /// Smallest integer not below `self`.
    pub fn ceil(&self) -> Self {
        -(-self).floor()
    }

    /// Keeps at most `significant` most-significant digits, folding the
    /// removed positions into the exponent. The value rounds toward zero;
    /// a zero budget yields zero.
    pub fn trunc_digits(&self, significant: usize) -> Self {
        if significant == 0 {
            return Self::zero();
        }
        if self.digits.len() <= significant {
            return self.clone();
        }
        let remove = self.digits.len() - significant;
        let kept = DigitBuf::from_slice(&self.digits[remove..]);
        Self::from_parts(self.sign, kept, self.exponent + remove as i64)
    }
}
