// ============================================================================
// Division and Modulo
// Bounded-precision long division with a most-significant remainder window
// ============================================================================

use crate::arithmetic::digits;
use crate::config;
use crate::decimal::{BigDecimal, DecimalError, DecimalResult, DigitBuf};
use std::cmp::Ordering;
use std::ops::{Div, Rem};

/// Outcome of a bounded-precision division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotient {
    /// Quotient truncated toward zero at the significant-digit budget.
    pub value: BigDecimal,
    /// True when the division terminated with a zero remainder.
    pub exact: bool,
}

impl BigDecimal {
    /// Divides at an explicit significant-digit budget.
    ///
    /// Significant digits count from the first nonzero quotient digit;
    /// the quotient truncates toward zero when the budget runs out, and
    /// `exact` reports whether it did.
    ///
    /// # Errors
    /// [`DecimalError::DivisionByZero`] when the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use longhand::BigDecimal;
    ///
    /// let one: BigDecimal = "1".parse().unwrap();
    /// let three: BigDecimal = "3".parse().unwrap();
    /// let q = one.div_with_digits(&three, 10).unwrap();
    /// assert_eq!(q.value.to_string(), "0.3333333333");
    /// assert!(!q.exact);
    /// ```
    pub fn div_with_digits(
        &self,
        divisor: &Self,
        max_significant: usize,
    ) -> DecimalResult<Quotient> {
        long_division(self, divisor, max_significant)
    }

    /// Divides at the process-wide significant-digit budget.
    ///
    /// # Errors
    /// [`DecimalError::DivisionByZero`] when the divisor is zero.
    pub fn div_full(&self, divisor: &Self) -> DecimalResult<Quotient> {
        long_division(self, divisor, config::division_digits())
    }

    /// Divides at the process-wide budget, discarding the exactness flag.
    ///
    /// # Errors
    /// [`DecimalError::DivisionByZero`] when the divisor is zero.
    pub fn checked_div(&self, divisor: &Self) -> DecimalResult<Self> {
        self.div_full(divisor).map(|q| q.value)
    }

    /// Floored modulo: `a - b * floor(a / b)`, so a nonzero result takes
    /// the divisor's sign and `a % b` lands in `[0, b)` for positive `b`.
    /// Any angle modulo a positive period therefore lands in
    /// `[0, period)`, which the trigonometric range reduction relies on.
    ///
    /// The quotient budget is derived from the operands' magnitudes, not
    /// the process-wide division budget, so the floor stays exact however
    /// far apart the operands sit.
    ///
    /// # Errors
    /// [`DecimalError::DivisionByZero`] when the divisor is zero.
    pub fn checked_rem(&self, divisor: &Self) -> DecimalResult<Self> {
        // The quotient's integer part spans at most one digit more than
        // the gap between the operands' magnitude classes, and the long
        // division emits true digits up to its budget, so this budget
        // makes the integer part exact.
        let span = (self.digit_count() as i64 + self.exponent)
            - (divisor.digit_count() as i64 + divisor.exponent)
            + 1;
        let quotient = self.div_with_digits(divisor, span.max(1) as usize)?;
        let mut floor = quotient.value.floor();
        // An integer-valued truncation can hide a nonzero fraction past
        // the budget; a negative quotient then floors one step further
        // down.
        if !quotient.exact && quotient.value.is_integer() && self.sign != divisor.sign {
            floor = &floor - &Self::one();
        }
        Ok(self - &(divisor * &floor))
    }
}

/// Long division over absolute digit strings.
///
/// The divisor first sheds least-significant zeros into its exponent.
/// Digits of the dividend then come down most-significant first into a
/// remainder window; each step emits the largest single digit whose
/// multiple of the divisor fits the window, found by trial subtraction.
/// Once the dividend is exhausted the window keeps pulling zeros, which
/// extends the quotient below the radix point.
fn long_division(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
    max_significant: usize,
) -> DecimalResult<Quotient> {
    if divisor.is_zero() {
        return Err(DecimalError::DivisionByZero);
    }
    if dividend.is_zero() {
        return Ok(Quotient {
            value: BigDecimal::zero(),
            exact: true,
        });
    }
    if max_significant == 0 {
        return Ok(Quotient {
            value: BigDecimal::zero(),
            exact: false,
        });
    }

    let sign = dividend.sign == divisor.sign;

    let mut divisor_digits: DigitBuf = divisor.digits.clone();
    let mut divisor_exponent = divisor.exponent;
    let stripped = divisor_digits.iter().take_while(|&&d| d == 0).count();
    if stripped > 0 {
        divisor_digits.drain(..stripped);
        divisor_exponent += stripped as i64;
    }

    let dividend_len = dividend.digits.len();
    let mut remainder = DigitBuf::new();
    // Most-significant first while the loop runs; reversed into storage
    // order at the end.
    let mut quotient = DigitBuf::new();
    let mut significant = 0usize;
    let mut consumed = 0usize;
    let mut exact = false;

    loop {
        let next = if consumed < dividend_len {
            dividend.digits[dividend_len - 1 - consumed]
        } else {
            0
        };
        consumed += 1;
        remainder.insert(0, next);
        digits::trim_most_significant(&mut remainder);

        let mut digit = 0u8;
        while digits::cmp_magnitude(&remainder, &divisor_digits) != Ordering::Less {
            digits::sub_assign_magnitude(&mut remainder, &divisor_digits);
            digit += 1;
        }
        quotient.push(digit);
        if digit != 0 || significant > 0 {
            significant += 1;
        }

        if remainder.is_empty() && consumed >= dividend_len {
            exact = true;
            break;
        }
        if significant >= max_significant {
            break;
        }
    }

    // Each emitted digit has place value 10^(dividend_len - 1 - k) against
    // the dividend's digit string, so the emitted run sits at
    // 10^(dividend_len - emitted) before the operand exponents weigh in.
    let exponent = (dividend.exponent - divisor_exponent)
        + (dividend_len as i64 - quotient.len() as i64);
    quotient.reverse();
    Ok(Quotient {
        value: BigDecimal::from_parts(sign, quotient, exponent),
        exact,
    })
}

impl Div<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    /// # Panics
    /// Panics on a zero divisor; use [`BigDecimal::checked_div`] to handle
    /// the error instead.
    fn div(self, other: &BigDecimal) -> BigDecimal {
        self.checked_div(other).expect("BigDecimal division by zero")
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigDecimal, div);

impl Rem<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    /// # Panics
    /// Panics on a zero divisor; use [`BigDecimal::checked_rem`] to handle
    /// the error instead.
    fn rem(self, other: &BigDecimal) -> BigDecimal {
        self.checked_rem(other).expect("BigDecimal modulo by zero")
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigDecimal, rem);
