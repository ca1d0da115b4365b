//! Decoding of a single observation cell.
//!
//! The API reports each value as `{"v": "<number>"}`, but a cell can also be
//! `null`, an empty object, or an object whose `v` is empty. All of those are
//! resolved here, once, into a [`Cell`].

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// A decoded observation value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Numeric(f64),
    Missing,
}

impl Cell {
    pub fn value(self) -> Option<f64> {
        match self {
            Cell::Numeric(v) => Some(v),
            Cell::Missing => None,
        }
    }

    fn from_json<E: de::Error>(raw: Value) -> Result<Self, E> {
        let Value::Object(mut fields) = raw else {
            return Ok(Cell::Missing);
        };
        match fields.remove("v") {
            Some(Value::String(s)) if !s.is_empty() => s
                .trim()
                .parse::<f64>()
                .map(Cell::Numeric)
                .map_err(|_| E::custom(format!("observation value '{s}' is not a number"))),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v != 0.0 => Ok(Cell::Numeric(v)),
                _ => Ok(Cell::Missing),
            },
            Some(Value::Bool(true)) => Ok(Cell::Numeric(1.0)),
            Some(Value::Array(items)) if !items.is_empty() => Err(E::custom(
                "observation value is an array, expected a number",
            )),
            Some(Value::Object(inner)) if !inner.is_empty() => Err(E::custom(
                "observation value is an object, expected a number",
            )),
            _ => Ok(Cell::Missing),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Cell::from_json(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<Cell, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn string_value_is_numeric() {
        assert_eq!(decode(r#"{"v": "0.25"}"#).unwrap(), Cell::Numeric(0.25));
    }

    #[test]
    fn zero_string_is_still_a_value() {
        assert_eq!(decode(r#"{"v": "0"}"#).unwrap(), Cell::Numeric(0.0));
    }

    #[test]
    fn empty_or_absent_value_is_missing() {
        assert_eq!(decode(r#"{}"#).unwrap(), Cell::Missing);
        assert_eq!(decode(r#"{"v": ""}"#).unwrap(), Cell::Missing);
        assert_eq!(decode(r#"{"v": null}"#).unwrap(), Cell::Missing);
        assert_eq!(decode("null").unwrap(), Cell::Missing);
        assert_eq!(decode(r#""1.5""#).unwrap(), Cell::Missing);
    }

    #[test]
    fn numeric_json_values_follow_truthiness() {
        assert_eq!(decode(r#"{"v": 1.5}"#).unwrap(), Cell::Numeric(1.5));
        assert_eq!(decode(r#"{"v": 0}"#).unwrap(), Cell::Missing);
    }

    #[test]
    fn garbage_value_is_an_error() {
        assert!(decode(r#"{"v": "n/a"}"#).is_err());
    }

    #[test]
    fn nested_value_is_an_error() {
        assert!(decode(r#"{"v": ["1"]}"#).is_err());
        assert!(decode(r#"{"v": {"x": "1"}}"#).is_err());
    }

    #[test]
    fn empty_nested_value_is_missing() {
        assert_eq!(decode(r#"{"v": []}"#).unwrap(), Cell::Missing);
        assert_eq!(decode(r#"{"v": {}}"#).unwrap(), Cell::Missing);
    }
}
