//! Lenient serde adapters for values the API does not encode consistently
//!
//! Decimal columns arrive either as JSON numbers or as numeric strings,
//! and boolean flags either as booleans, "true"/"false" strings or 0/1.
//! Outgoing decimals with no fractional part are written as integers.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Serializer;
use std::fmt;

/// Deserialize an `f64` from a JSON number or a numeric string
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NumberVisitor)
}

/// Deserialize a `bool` from a JSON bool, "true"/"false" or 0/1
pub fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(BoolVisitor)
}

/// Serialize an `f64` as a JSON integer when it has no fractional part
pub fn integral_as_int<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        v.trim()
            .parse::<f64>()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

struct BoolVisitor;

impl<'de> Visitor<'de> for BoolVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean, \"true\"/\"false\" or 0/1")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        match v.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "number_or_string")]
        n: f64,
        #[serde(deserialize_with = "bool_or_string")]
        b: bool,
    }

    #[test]
    fn test_accepts_numeric_strings_and_string_flags() {
        let p: Probe = serde_json::from_str(r#"{"n": "125.50", "b": "true"}"#).unwrap();
        assert_eq!(p.n, 125.5);
        assert!(p.b);
    }

    #[test]
    fn test_accepts_native_values() {
        let p: Probe = serde_json::from_str(r#"{"n": 7, "b": 0}"#).unwrap();
        assert_eq!(p.n, 7.0);
        assert!(!p.b);
    }

    #[derive(Serialize)]
    struct Outgoing {
        #[serde(serialize_with = "integral_as_int")]
        n: f64,
    }

    #[test]
    fn test_integral_decimals_are_written_as_integers() {
        let whole = serde_json::to_string(&Outgoing { n: 100.0 }).unwrap();
        assert_eq!(whole, r#"{"n":100}"#);

        let fraction = serde_json::to_string(&Outgoing { n: 62.5 }).unwrap();
        assert_eq!(fraction, r#"{"n":62.5}"#);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Probe>(r#"{"n": "abc", "b": true}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"n": 1, "b": "yes"}"#).is_err());
    }
}
