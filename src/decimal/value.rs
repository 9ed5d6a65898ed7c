// ============================================================================
// BigDecimal Value Type
// Sign, base-10 digit array (least-significant first) and decimal exponent
// ============================================================================

use num_traits::{One, Signed, Zero};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// Digit storage. Values up to 16 digits stay inline; long division output
/// spills to the heap.
pub(crate) type DigitBuf = SmallVec<[u8; 16]>;

/// Arbitrary-precision signed decimal number.
///
/// The value is `sign * (sum of digits[i] * 10^i) * 10^exponent`, with
/// digits stored least-significant first, each in `0..=9`. Public API
/// always returns normalized values: no most-significant zero digits, and
/// zero is the canonical triple (empty digits, exponent 0, non-negative
/// sign). Least-significant zeros are kept, so `1.00` remembers its scale
/// for formatting while still comparing equal to `1`.
///
/// # Example
/// ```
/// use longhand::BigDecimal;
///
/// let a: BigDecimal = "2.5".parse().unwrap();
/// let b: BigDecimal = "-1.5".parse().unwrap();
/// let sum = a + b;
/// assert_eq!(sum, "1".parse().unwrap());
/// assert_eq!(sum.to_string(), "1.0");
/// ```
#[derive(Clone)]
pub struct BigDecimal {
    /// `true` for non-negative values; canonical zero is non-negative.
    pub(crate) sign: bool,
    /// Base-10 digits, least significant first.
    pub(crate) digits: DigitBuf,
    /// Power-of-ten scale applied to the digit string.
    pub(crate) exponent: i64,
}

impl BigDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Builds a value from raw parts and normalizes it.
    pub(crate) fn from_parts(sign: bool, digits: DigitBuf, exponent: i64) -> Self {
        let mut value = Self {
            sign,
            digits,
            exponent,
        };
        value.normalize();
        value
    }

    /// The canonical zero.
    #[inline]
    pub fn zero() -> Self {
        Self {
            sign: true,
            digits: DigitBuf::new(),
            exponent: 0,
        }
    }

    /// The value one.
    #[inline]
    pub fn one() -> Self {
        let mut digits = DigitBuf::new();
        digits.push(1);
        Self {
            sign: true,
            digits,
            exponent: 0,
        }
    }

    // ========================================================================
    // Normalization and alignment
    // ========================================================================

    /// Strips most-significant zero digits and collapses all-zero values to
    /// canonical zero. Idempotent; least-significant zeros are untouched.
    pub(crate) fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.exponent = 0;
            self.sign = true;
        }
    }

    /// Rewrites both values to the smaller of the two exponents by
    /// prepending least-significant zero digits. Neither value changes.
    pub(crate) fn align(a: &mut Self, b: &mut Self) {
        let target = a.exponent.min(b.exponent);
        a.shift_to_exponent(target);
        b.shift_to_exponent(target);
    }

    /// Lowers the exponent to `target`, padding with least-significant
    /// zeros. `target` must not exceed the current exponent. Zero aligns
    /// without growing its digit string.
    pub(crate) fn shift_to_exponent(&mut self, target: i64) {
        debug_assert!(target <= self.exponent);
        if self.is_zero() {
            self.exponent = target;
            return;
        }
        let pad = (self.exponent - target) as usize;
        if pad > 0 {
            self.digits.insert_many(0, std::iter::repeat(0).take(pad));
            self.exponent = target;
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns true if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign && !self.is_zero()
    }

    /// Returns true if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    /// Returns true if no nonzero digit sits below position zero.
    pub fn is_integer(&self) -> bool {
        if self.exponent >= 0 {
            return true;
        }
        let below_point = (-self.exponent) as usize;
        self.digits
            .iter()
            .take(below_point.min(self.digits.len()))
            .all(|&d| d == 0)
    }

    /// Number of stored digits (zero for the canonical zero).
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        let mut value = self.clone();
        value.sign = true;
        value
    }

    /// Digit at `offset` positions below the most significant digit,
    /// reading 0 past the least-significant end.
    #[inline]
    pub(crate) fn digit_from_top(&self, offset: usize) -> u8 {
        self.digits
            .len()
            .checked_sub(1 + offset)
            .map_or(0, |idx| self.digits[idx])
    }

    /// Compares absolute values. Operands must be nonzero and normalized.
    ///
    /// The position just above the most significant digit is
    /// `digits.len() + exponent`; comparing those classes first makes the
    /// comparison independent of stored scale, so no alignment copy is
    /// needed. Ties walk digits from the most significant position down.
    pub(crate) fn cmp_magnitude(&self, other: &Self) -> Ordering {
        debug_assert!(!self.is_zero() && !other.is_zero());
        let self_top = self.digits.len() as i64 + self.exponent;
        let other_top = other.digits.len() as i64 + other.exponent;
        match self_top.cmp(&other_top) {
            Ordering::Equal => {},
            unequal => return unequal,
        }
        let positions = self.digits.len().max(other.digits.len());
        for offset in 0..positions {
            match self
                .digit_from_top(offset)
                .cmp(&other.digit_from_top(offset))
            {
                Ordering::Equal => {},
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.sign {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            },
            (false, true) => {
                return if self.sign {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            },
            (false, false) => {},
        }
        if self.sign != other.sign {
            return if self.sign {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        let magnitude = self.cmp_magnitude(other);
        if self.sign {
            magnitude
        } else {
            magnitude.reverse()
        }
    }
}

impl Hash for BigDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Fold least-significant zeros into the exponent so that values
        // comparing equal (1.00 and 1) hash equally.
        let mut first_nonzero = 0;
        while first_nonzero < self.digits.len() && self.digits[first_nonzero] == 0 {
            first_nonzero += 1;
        }
        let significant = &self.digits[first_nonzero..];
        self.sign.hash(state);
        significant.hash(state);
        if significant.is_empty() {
            0i64.hash(state);
        } else {
            (self.exponent + first_nonzero as i64).hash(state);
        }
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    fn neg(mut self) -> BigDecimal {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
        self
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        -self.clone()
    }
}

impl Zero for BigDecimal {
    fn zero() -> Self {
        BigDecimal::zero()
    }

    fn is_zero(&self) -> bool {
        BigDecimal::is_zero(self)
    }
}

impl One for BigDecimal {
    fn one() -> Self {
        BigDecimal::one()
    }
}

impl Signed for BigDecimal {
    fn abs(&self) -> Self {
        BigDecimal::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else if self.sign {
            Self::one()
        } else {
            -Self::one()
        }
    }

    fn is_positive(&self) -> bool {
        BigDecimal::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigDecimal::is_negative(self)
    }
}
