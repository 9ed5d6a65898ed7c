// ============================================================================
// Addition and Subtraction
// Four-case sign dispatch over unsigned digit magnitudes
// ============================================================================

use crate::arithmetic::digits;
use crate::decimal::BigDecimal;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Signed addition. Mixed signs hand off to subtraction so the digit
/// loops only ever see a common sign.
fn add_impl(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    match (a.sign, b.sign) {
        (true, false) => return sub_impl(a, &b.abs()),
        (false, true) => return sub_impl(b, &a.abs()),
        _ => {},
    }
    let mut x = a.clone();
    let mut y = b.clone();
    BigDecimal::align(&mut x, &mut y);
    let summed = digits::add_magnitude(&x.digits, &y.digits);
    BigDecimal::from_parts(x.sign, summed, x.exponent)
}

/// Signed subtraction. Mixed signs hand off to addition; a common sign
/// subtracts the smaller magnitude from the larger, and the swap decides
/// the result sign.
fn sub_impl(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    match (a.sign, b.sign) {
        // a - (-b) = a + b
        (true, false) => return add_impl(a, &b.abs()),
        // (-a) - b = -(a + b)
        (false, true) => return -add_impl(&a.abs(), b),
        _ => {},
    }
    let mut x = a.clone();
    let mut y = b.clone();
    BigDecimal::align(&mut x, &mut y);
    let swapped = digits::cmp_magnitude(&x.digits, &y.digits) == Ordering::Less;
    let (larger, smaller) = if swapped { (&y, &x) } else { (&x, &y) };
    let difference = digits::sub_magnitude(&larger.digits, &smaller.digits);
    let sign = if a.sign { !swapped } else { swapped };
    BigDecimal::from_parts(sign, difference, x.exponent)
}

impl Add<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn add(self, other: &BigDecimal) -> BigDecimal {
        add_impl(self, other)
    }
}

impl Sub<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn sub(self, other: &BigDecimal) -> BigDecimal {
        sub_impl(self, other)
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigDecimal, add);
forward_all_binop_to_ref_ref!(impl Sub for BigDecimal, sub);

impl AddAssign<&BigDecimal> for BigDecimal {
    fn add_assign(&mut self, other: &BigDecimal) {
        *self = &*self + other;
    }
}

impl SubAssign<&BigDecimal> for BigDecimal {
    fn sub_assign(&mut self, other: &BigDecimal) {
        *self = &*self - other;
    }
}

forward_val_assignop!(impl AddAssign for BigDecimal, add_assign);
forward_val_assignop!(impl SubAssign for BigDecimal, sub_assign);
