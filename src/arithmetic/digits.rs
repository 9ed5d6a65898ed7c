// ============================================================================
// Digit Magnitude Primitives
// Unsigned schoolbook helpers shared by add, subtract, multiply and divide
// ============================================================================

use crate::decimal::DigitBuf;
use std::cmp::Ordering;

/// Length of a digit string ignoring most-significant zeros.
fn effective_len(digits: &[u8]) -> usize {
    let mut len = digits.len();
    while len > 0 && digits[len - 1] == 0 {
        len -= 1;
    }
    len
}

/// Compares two aligned digit strings as unsigned integers.
///
/// Both strings are least-significant first and must share the same
/// exponent; most-significant zeros are tolerated.
pub(crate) fn cmp_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    let a_len = effective_len(a);
    let b_len = effective_len(b);
    match a_len.cmp(&b_len) {
        Ordering::Equal => {},
        unequal => return unequal,
    }
    for i in (0..a_len).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {},
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Adds two aligned digit strings, propagating the carry.
pub(crate) fn add_magnitude(a: &[u8], b: &[u8]) -> DigitBuf {
    let positions = a.len().max(b.len());
    let mut out = DigitBuf::with_capacity(positions + 1);
    let mut carry = 0u8;
    for i in 0..positions {
        let sum = digit_at(a, i) + digit_at(b, i) + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Subtracts `b` from `a`, borrowing. Requires `a >= b`; the result may
/// carry most-significant zeros for the caller to normalize.
pub(crate) fn sub_magnitude(a: &[u8], b: &[u8]) -> DigitBuf {
    debug_assert!(cmp_magnitude(a, b) != Ordering::Less);
    let mut out = DigitBuf::with_capacity(a.len());
    let mut borrow = 0i8;
    for i in 0..a.len() {
        let mut diff = a[i] as i8 - borrow - digit_at(b, i) as i8;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u8);
    }
    debug_assert_eq!(borrow, 0);
    out
}

/// Subtracts `b` from `a` in place and trims most-significant zeros.
/// Requires `a >= b`.
pub(crate) fn sub_assign_magnitude(a: &mut DigitBuf, b: &[u8]) {
    debug_assert!(cmp_magnitude(a, b) != Ordering::Less);
    let mut borrow = 0i8;
    for i in 0..a.len() {
        let mut diff = a[i] as i8 - borrow - digit_at(b, i) as i8;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        a[i] = diff as u8;
    }
    debug_assert_eq!(borrow, 0);
    trim_most_significant(a);
}

/// Drops most-significant zeros; an all-zero string becomes empty.
pub(crate) fn trim_most_significant(digits: &mut DigitBuf) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

/// Scales a digit string by a single digit, reducing carries as it goes.
pub(crate) fn mul_digit(digits: &[u8], factor: u8) -> DigitBuf {
    debug_assert!(factor <= 9);
    let mut out = DigitBuf::with_capacity(digits.len() + 1);
    let mut carry = 0u8;
    for &d in digits {
        let product = d * factor + carry;
        out.push(product % 10);
        carry = product / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Adds `row * 10^shift` into the accumulator in place.
pub(crate) fn add_assign_shifted(acc: &mut DigitBuf, row: &[u8], shift: usize) {
    if acc.len() < shift + row.len() {
        acc.resize(shift + row.len(), 0);
    }
    let mut carry = 0u8;
    for (i, &d) in row.iter().enumerate() {
        let sum = acc[shift + i] + d + carry;
        acc[shift + i] = sum % 10;
        carry = sum / 10;
    }
    let mut i = shift + row.len();
    while carry > 0 {
        if i == acc.len() {
            acc.push(carry);
            break;
        }
        let sum = acc[i] + carry;
        acc[i] = sum % 10;
        carry = sum / 10;
        i += 1;
    }
}

#[inline]
fn digit_at(digits: &[u8], i: usize) -> u8 {
    digits.get(i).copied().unwrap_or(0)
}
