// ============================================================================
// Decimal Parsing
// Text to BigDecimal: sign, digits, radix point, exponent suffix
// ============================================================================

use crate::decimal::errors::ParseDecimalError;
use crate::decimal::value::{BigDecimal, DigitBuf};
use num_traits::Num;
use std::str::FromStr;

impl FromStr for BigDecimal {
    type Err = ParseDecimalError;

    /// Parses a decimal literal.
    ///
    /// Accepts an optional leading sign, at most one radix point, an
    /// optional case-insensitive `E<integer>` suffix (the integer may carry
    /// its own sign) and ASCII digits. ASCII whitespace is ignored wherever
    /// it appears. Digits after the radix point lower the exponent by one
    /// each; the suffix value is then added on top. Exponents are accepted
    /// in the `i32` range; the wider internal type keeps intermediate
    /// exponent arithmetic exact.
    ///
    /// # Errors
    ///
    /// - [`ParseDecimalError::Empty`] if no digits are present
    /// - [`ParseDecimalError::MultipleRadixPoints`] on a second `.`
    /// - [`ParseDecimalError::InvalidExponent`] if the suffix has no digits
    ///   or is out of range
    /// - [`ParseDecimalError::InvalidCharacter`] on anything else
    ///
    /// # Example
    /// ```
    /// use longhand::BigDecimal;
    ///
    /// let value: BigDecimal = "1.7E+3".parse().unwrap();
    /// assert_eq!(value.to_string(), "1.7E+3");
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();

        let (mantissa, suffix) = match compact.find(['e', 'E']) {
            Some(pos) => (&compact[..pos], Some(&compact[pos + 1..])),
            None => (compact.as_str(), None),
        };
        let suffix_exponent = match suffix {
            Some(text) => parse_exponent(text)?,
            None => 0,
        };

        let mut sign = true;
        let mut seen_point = false;
        let mut fraction_digits = 0i64;
        // Digits collect most-significant first in text order and are
        // reversed into storage order below.
        let mut digits = DigitBuf::new();

        for (index, c) in mantissa.char_indices() {
            match c {
                '+' | '-' if index == 0 => sign = c == '+',
                '.' if seen_point => return Err(ParseDecimalError::MultipleRadixPoints),
                '.' => seen_point = true,
                '0'..='9' => {
                    digits.push(c as u8 - b'0');
                    if seen_point {
                        fraction_digits += 1;
                    }
                },
                other => return Err(ParseDecimalError::InvalidCharacter(other)),
            }
        }
        if digits.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let exponent = suffix_exponent - fraction_digits;
        if i32::try_from(exponent).is_err() {
            return Err(ParseDecimalError::InvalidExponent);
        }

        digits.reverse();
        Ok(BigDecimal::from_parts(sign, digits, exponent))
    }
}

/// Parses the integer after the `E` marker: optional sign, ASCII digits.
fn parse_exponent(text: &str) -> Result<i64, ParseDecimalError> {
    let unsigned = match text.as_bytes().first() {
        None => return Err(ParseDecimalError::InvalidExponent),
        Some(b'+') => &text[1..],
        Some(b'-') => &text[1..],
        Some(_) => text,
    };
    if unsigned.is_empty() {
        return Err(ParseDecimalError::InvalidExponent);
    }
    let mut value = 0i64;
    for c in unsigned.chars() {
        let digit = c
            .to_digit(10)
            .ok_or(ParseDecimalError::InvalidCharacter(c))?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(digit)))
            .ok_or(ParseDecimalError::InvalidExponent)?;
    }
    Ok(if text.starts_with('-') { -value } else { value })
}

impl Num for BigDecimal {
    type FromStrRadixErr = ParseDecimalError;

    /// Parses a decimal literal; only radix 10 is supported.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix != 10 {
            return Err(ParseDecimalError::UnsupportedRadix);
        }
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(s: &str) -> (bool, Vec<u8>, i64) {
        let value: BigDecimal = s.parse().unwrap();
        (value.sign, value.digits.to_vec(), value.exponent)
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parts("123"), (true, vec![3, 2, 1], 0));
        assert_eq!(parts("-45"), (false, vec![5, 4], 0));
        assert_eq!(parts("+7"), (true, vec![7], 0));
    }

    #[test]
    fn test_parse_radix_point_shifts_exponent() {
        assert_eq!(parts("1.5"), (true, vec![5, 1], -1));
        assert_eq!(parts(".5"), (true, vec![5], -1));
        assert_eq!(parts("5."), (true, vec![5], 0));
        assert_eq!(parts("0.025"), (true, vec![5, 2], -3));
    }

    #[test]
    fn test_parse_exponent_suffix() {
        assert_eq!(parts("1.7E+3"), (true, vec![7, 1], 2));
        assert_eq!(parts("1.7e3"), (true, vec![7, 1], 2));
        assert_eq!(parts("25E-4"), (true, vec![5, 2], -4));
        assert_eq!(parts("-2E2"), (false, vec![2], 2));
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(parts("007"), (true, vec![7], 0));
        // Trailing fractional zeros are significant and survive.
        assert_eq!(parts("1.00"), (true, vec![0, 0, 1], -2));
    }

    #[test]
    fn test_parse_zero_is_canonical() {
        for text in ["0", "0.000", "-0", "+0.0", "000"] {
            let value: BigDecimal = text.parse().unwrap();
            assert!(value.is_zero(), "{text}");
            assert!(value.sign);
            assert_eq!(value.exponent, 0);
        }
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        assert_eq!(parts(" 1 000 "), (true, vec![0, 0, 0, 1], 0));
        assert_eq!(parts("- 2.5"), (false, vec![5, 2], -1));
    }

    #[test]
    fn test_parse_empty_inputs() {
        for text in ["", " ", "+", "-", ".", "+.", "E5"] {
            assert_eq!(
                text.parse::<BigDecimal>(),
                Err(ParseDecimalError::Empty),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_eq!(
            "12x3".parse::<BigDecimal>(),
            Err(ParseDecimalError::InvalidCharacter('x'))
        );
        // Signs are leading-only.
        assert_eq!(
            "1-2".parse::<BigDecimal>(),
            Err(ParseDecimalError::InvalidCharacter('-'))
        );
    }

    #[test]
    fn test_parse_multiple_radix_points() {
        assert_eq!(
            "1.2.3".parse::<BigDecimal>(),
            Err(ParseDecimalError::MultipleRadixPoints)
        );
    }

    #[test]
    fn test_parse_bad_exponent() {
        for text in ["1E", "1E+", "1E-", "1E99999999999999999999"] {
            assert_eq!(
                text.parse::<BigDecimal>(),
                Err(ParseDecimalError::InvalidExponent),
                "{text:?}"
            );
        }
        assert_eq!(
            "1Ex".parse::<BigDecimal>(),
            Err(ParseDecimalError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn test_parse_exponent_range() {
        assert!("1E2147483647".parse::<BigDecimal>().is_ok());
        assert!("1E2147483648".parse::<BigDecimal>().is_err());
        assert!("1E-2147483648".parse::<BigDecimal>().is_ok());
    }

    #[test]
    fn test_from_str_radix() {
        assert_eq!(
            BigDecimal::from_str_radix("1.5", 10).unwrap(),
            "1.5".parse().unwrap()
        );
        assert_eq!(
            BigDecimal::from_str_radix("ff", 16),
            Err(ParseDecimalError::UnsupportedRadix)
        );
    }
}
