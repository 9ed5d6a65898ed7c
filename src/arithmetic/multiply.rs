// ============================================================================
// Multiplication
// Schoolbook partial-product rows accumulated with the digit adder
// ============================================================================

use crate::arithmetic::digits;
use crate::decimal::{BigDecimal, DigitBuf};
use std::ops::{Mul, MulAssign};

/// Schoolbook multiplication: one carry-reduced row per digit of the
/// shorter operand, shifted by the digit's position and summed into the
/// accumulator. Signs multiply through equality; exponents add.
fn mul_impl(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    if a.is_zero() || b.is_zero() {
        return BigDecimal::zero();
    }
    let (short, long) = if a.digits.len() <= b.digits.len() {
        (a, b)
    } else {
        (b, a)
    };
    let mut acc = DigitBuf::new();
    for (position, &digit) in short.digits.iter().enumerate() {
        if digit == 0 {
            continue;
        }
        let row = digits::mul_digit(&long.digits, digit);
        digits::add_assign_shifted(&mut acc, &row, position);
    }
    BigDecimal::from_parts(a.sign == b.sign, acc, a.exponent + b.exponent)
}

impl Mul<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn mul(self, other: &BigDecimal) -> BigDecimal {
        mul_impl(self, other)
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigDecimal, mul);

impl MulAssign<&BigDecimal> for BigDecimal {
    fn mul_assign(&mut self, other: &BigDecimal) {
        *self = &*self * other;
    }
}

forward_val_assignop!(impl MulAssign for BigDecimal, mul_assign);
