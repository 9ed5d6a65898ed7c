// ============================================================================
// Decimal Formatting
// BigDecimal to text: positional below one, scientific above the digits
// ============================================================================

use crate::decimal::value::BigDecimal;
use std::fmt;

/// Sign rendering preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignMode {
    /// Prefix negative values only.
    #[default]
    NegativeOnly,
    /// Prefix non-negative values with `+` as well.
    Always,
}

impl BigDecimal {
    /// Renders the value with an explicit sign mode.
    ///
    /// Zero renders as `"0"`. A zero or negative exponent renders
    /// positionally (`"1700"`, `"0.025"`); a positive exponent renders in
    /// scientific form with the radix point after the first significant
    /// digit (`"1.7E+3"`), which parses back to the identical
    /// representation.
    pub fn format_with(&self, mode: SignMode) -> String {
        let mut out = String::with_capacity(self.digits.len() + 8);
        if self.is_negative() {
            out.push('-');
        } else if mode == SignMode::Always {
            out.push('+');
        }
        if self.is_zero() {
            out.push('0');
            return out;
        }
        if self.exponent == 0 {
            self.write_plain(&mut out);
        } else if self.exponent < 0 {
            self.write_positional(&mut out);
        } else {
            self.write_scientific(&mut out);
        }
        out
    }

    fn write_plain(&self, out: &mut String) {
        for &d in self.digits.iter().rev() {
            out.push(digit_char(d));
        }
    }

    fn write_positional(&self, out: &mut String) {
        let fraction = (-self.exponent) as usize;
        let len = self.digits.len();
        if len > fraction {
            for &d in self.digits[fraction..].iter().rev() {
                out.push(digit_char(d));
            }
            out.push('.');
            for &d in self.digits[..fraction].iter().rev() {
                out.push(digit_char(d));
            }
        } else {
            out.push_str("0.");
            for _ in 0..fraction - len {
                out.push('0');
            }
            self.write_plain(out);
        }
    }

    fn write_scientific(&self, out: &mut String) {
        let len = self.digits.len();
        out.push(digit_char(self.digits[len - 1]));
        if len > 1 {
            out.push('.');
            for &d in self.digits[..len - 1].iter().rev() {
                out.push(digit_char(d));
            }
        }
        // Positive stored exponent, so the displayed exponent is positive
        // as well.
        let displayed = self.exponent + len as i64 - 1;
        out.push_str("E+");
        out.push_str(&displayed.to_string());
    }

    /// Fully positional rendering regardless of exponent, for consumers
    /// that cannot read scientific notation.
    pub(crate) fn positional_text(&self) -> String {
        if self.exponent <= 0 {
            return self.format_with(SignMode::NegativeOnly);
        }
        let mut out = String::with_capacity(self.digits.len() + self.exponent as usize + 1);
        if self.is_negative() {
            out.push('-');
        }
        self.write_plain(&mut out);
        for _ in 0..self.exponent {
            out.push('0');
        }
        out
    }
}

#[inline]
fn digit_char(d: u8) -> char {
    char::from(b'0' + d)
}

impl fmt::Display for BigDecimal {
    /// Renders with [`SignMode::NegativeOnly`]; see
    /// [`BigDecimal::format_with`] for the shape of the output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(SignMode::NegativeOnly))
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BigDecimal({}, digits={:?}, exponent={}, sign={})",
            self, self.digits, self.exponent, self.sign
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(dec("0").to_string(), "0");
        assert_eq!(dec("-0.000").to_string(), "0");
        assert_eq!(dec("0").format_with(SignMode::Always), "+0");
    }

    #[test]
    fn test_format_plain_integers() {
        assert_eq!(dec("123").to_string(), "123");
        assert_eq!(dec("-45").to_string(), "-45");
        assert_eq!(dec("1700").to_string(), "1700");
    }

    #[test]
    fn test_format_positional_fractions() {
        assert_eq!(dec("1.5").to_string(), "1.5");
        assert_eq!(dec("-12.75").to_string(), "-12.75");
        assert_eq!(dec("0.25").to_string(), "0.25");
        assert_eq!(dec("0.025").to_string(), "0.025");
        assert_eq!(dec("0.0005").to_string(), "0.0005");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(dec("1.7E+3").to_string(), "1.7E+3");
        assert_eq!(dec("3E5").to_string(), "3E+5");
        assert_eq!(dec("-2.5E+10").to_string(), "-2.5E+10");
        assert_eq!(dec("1.00E+3").to_string(), "1.00E+3");
    }

    #[test]
    fn test_format_round_trips_representation() {
        for text in [
            "1.7E+3",
            "0.025",
            "123",
            "-0.5",
            "1.00",
            "9E+1",
            "1111.222E+3",
            "1111.222E+20",
            "1111.222E-20",
        ] {
            let value = dec(text);
            let again = dec(&value.to_string());
            assert_eq!(value.digits, again.digits, "{text}");
            assert_eq!(value.exponent, again.exponent, "{text}");
            assert_eq!(value.sign, again.sign, "{text}");
        }
    }

    #[test]
    fn test_format_renormalizes_input_shape() {
        // The radix point moves to sit after the first significant digit,
        // so the rendered text can differ from the parsed text while the
        // value stays the same.
        assert_eq!(dec("1111.222E+3").to_string(), "1111222");
        assert_eq!(dec("1111.222E+20").to_string(), "1.111222E+23");
        assert_eq!(
            dec("1111.222E-20").to_string(),
            "0.00000000000000001111222"
        );
    }

    #[test]
    fn test_format_sign_modes() {
        assert_eq!(dec("2.5").format_with(SignMode::Always), "+2.5");
        assert_eq!(dec("2.5").format_with(SignMode::NegativeOnly), "2.5");
        assert_eq!(dec("-2.5").format_with(SignMode::Always), "-2.5");
    }

    #[test]
    fn test_positional_text_expands_exponent() {
        assert_eq!(dec("1.7E+3").positional_text(), "1700");
        assert_eq!(dec("-3E+2").positional_text(), "-300");
        assert_eq!(dec("0.025").positional_text(), "0.025");
    }

    #[test]
    fn test_debug_shows_raw_parts() {
        let repr = format!("{:?}", dec("-1.5"));
        assert!(repr.contains("-1.5"));
        assert!(repr.contains("exponent=-1"));
    }
}
