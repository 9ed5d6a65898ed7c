// ============================================================================
// Serde Support
// BigDecimal serializes as its display string (value and scale survive)
// ============================================================================

use crate::decimal::format::SignMode;
use crate::decimal::value::BigDecimal;
use num_traits::FromPrimitive;
use serde::{de, ser};
use std::fmt;

impl ser::Serialize for BigDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self.format_with(SignMode::NegativeOnly))
    }
}

struct BigDecimalVisitor;

impl de::Visitor<'_> for BigDecimalVisitor {
    type Value = BigDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a number or a decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        Ok(BigDecimal::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        Ok(BigDecimal::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<BigDecimal, E>
    where
        E: de::Error,
    {
        BigDecimal::from_f64(value)
            .ok_or_else(|| E::custom("non-finite float cannot become a decimal"))
    }
}

impl<'de> de::Deserialize<'de> for BigDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(BigDecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_string() {
        let cases = [
            ("1.5", "\"1.5\""),
            ("-0.025", "\"-0.025\""),
            ("1.7E+3", "\"1.7E+3\""),
            ("0", "\"0\""),
            ("1.00", "\"1.00\""),
        ];
        for (input, expected) in cases {
            let value: BigDecimal = input.parse().unwrap();
            assert_eq!(serde_json::to_string(&value).unwrap(), expected);
        }
    }

    #[test]
    fn test_deserialize_from_string() {
        let value: BigDecimal = serde_json::from_str("\"-12.75\"").unwrap();
        assert_eq!(value.to_string(), "-12.75");
    }

    #[test]
    fn test_deserialize_from_numbers() {
        let from_int: BigDecimal = serde_json::from_str("42").unwrap();
        assert_eq!(from_int.to_string(), "42");
        let from_float: BigDecimal = serde_json::from_str("0.5").unwrap();
        assert_eq!(from_float.to_string(), "0.5");
        let negative: BigDecimal = serde_json::from_str("-7").unwrap();
        assert_eq!(negative.to_string(), "-7");
    }

    #[test]
    fn test_round_trip_preserves_scale() {
        for text in ["1.00", "2.5E+3", "-0.0001"] {
            let value: BigDecimal = text.parse().unwrap();
            let json = serde_json::to_string(&value).unwrap();
            let back: BigDecimal = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), text);
        }
    }
}
