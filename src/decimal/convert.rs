// ============================================================================
// Decimal Conversions
// Primitive integers, floats and rust_decimal interop for API boundaries
// ============================================================================

use crate::decimal::format::SignMode;
use crate::decimal::value::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

macro_rules! impl_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for BigDecimal {
                /// Converts through the integer's decimal text.
                fn from(n: $t) -> Self {
                    n.to_string()
                        .parse()
                        .expect("integer text is a valid decimal literal")
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromPrimitive for BigDecimal {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(n.into())
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(n.into())
    }

    /// Converts through the float's shortest round-trip decimal text, so
    /// `0.1f64` arrives as `0.1` rather than its binary expansion.
    /// Non-finite inputs give `None`.
    fn from_f64(n: f64) -> Option<Self> {
        if n.is_finite() {
            n.to_string().parse().ok()
        } else {
            None
        }
    }
}

impl ToPrimitive for BigDecimal {
    fn to_i64(&self) -> Option<i64> {
        self.integer_text().and_then(|text| text.parse().ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.integer_text().and_then(|text| text.parse().ok())
    }

    /// Approximate conversion through the display text. Values beyond
    /// `f64` range come back as infinities.
    fn to_f64(&self) -> Option<f64> {
        self.format_with(SignMode::NegativeOnly).parse().ok()
    }
}

impl From<Decimal> for BigDecimal {
    /// Lossless: every `Decimal` formats as a plain decimal literal.
    fn from(d: Decimal) -> Self {
        d.to_string()
            .parse()
            .expect("Decimal always formats as a valid decimal literal")
    }
}

impl BigDecimal {
    /// Converts into a fixed-size [`Decimal`] for API boundaries.
    ///
    /// Returns `None` when the value does not fit `Decimal`'s 96-bit
    /// mantissa and 28-place scale. Stored trailing zeros are folded away
    /// first, so `1.000…0` converts however long its stored scale is.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let canonical = self.trim_trailing_zeros();
        if canonical.exponent > 32 || canonical.exponent < -64 || canonical.digit_count() > 40 {
            return None;
        }
        canonical.positional_text().parse().ok()
    }

    /// Copy with least-significant zeros folded into the exponent.
    pub(crate) fn trim_trailing_zeros(&self) -> Self {
        let mut value = self.clone();
        let mut removed = 0i64;
        while value.digits.first() == Some(&0) {
            value.digits.remove(0);
            removed += 1;
        }
        if value.digits.is_empty() {
            return Self::zero();
        }
        value.exponent += removed;
        value
    }

    /// Integer-valued rendering without scientific notation or radix
    /// point; `None` when the value is fractional or too long to fit a
    /// primitive.
    fn integer_text(&self) -> Option<String> {
        if !self.is_integer() {
            return None;
        }
        if self.is_zero() {
            return Some(String::from("0"));
        }
        // Fold stored zeros below the point away so 123.00 renders as 123.
        let canonical = self.trim_trailing_zeros();
        // u64::MAX has 20 digits; anything longer cannot fit.
        if canonical.digits.len() as i64 + canonical.exponent > 20 {
            return None;
        }
        Some(canonical.positional_text())
    }
}
