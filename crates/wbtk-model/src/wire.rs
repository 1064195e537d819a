//! Helpers for picking typed fields out of wire JSON documents.
//!
//! The Wikibase API is loose about numeric fields (amounts arrive as numbers
//! or as signed decimal strings depending on the endpoint), so the numeric
//! accessors accept both.

use serde_json::{Map, Value};

use crate::error::{ModelError, ModelResult};

pub(crate) fn as_object<'a>(value: &'a Value, what: &str) -> ModelResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ModelError::MalformedDocument(format!("{what} is not an object")))
}

pub(crate) fn str_field<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    what: &str,
) -> ModelResult<&'a str> {
    map.get(key).and_then(Value::as_str).ok_or_else(|| {
        ModelError::MalformedDocument(format!("{what} is missing string field {key:?}"))
    })
}

pub(crate) fn u64_field(map: &Map<String, Value>, key: &str, what: &str) -> ModelResult<u64> {
    map.get(key).and_then(Value::as_u64).ok_or_else(|| {
        ModelError::MalformedDocument(format!("{what} is missing integer field {key:?}"))
    })
}

pub(crate) fn i64_field_or(map: &Map<String, Value>, key: &str, default: i64) -> i64 {
    map.get(key).and_then(Value::as_i64).unwrap_or(default)
}

pub(crate) fn u64_field_or(map: &Map<String, Value>, key: &str, default: u64) -> u64 {
    map.get(key).and_then(Value::as_u64).unwrap_or(default)
}

/// A numeric field that may arrive as a JSON number or as a decimal string
/// (possibly with a leading sign).
pub(crate) fn f64_field(map: &Map<String, Value>, key: &str, what: &str) -> ModelResult<f64> {
    match map.get(key) {
        Some(value) => as_f64(value).ok_or_else(|| {
            ModelError::MalformedDocument(format!("{what} field {key:?} is not numeric"))
        }),
        None => Err(ModelError::MalformedDocument(format!(
            "{what} is missing numeric field {key:?}"
        ))),
    }
}

/// Like [`f64_field`], but a missing or `null` field yields `None`.
pub(crate) fn opt_f64_field(
    map: &Map<String, Value>,
    key: &str,
    what: &str,
) -> ModelResult<Option<f64>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_f64(value).map(Some).ok_or_else(|| {
            ModelError::MalformedDocument(format!("{what} field {key:?} is not numeric"))
        }),
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_fields_accept_numbers_and_strings() {
        let map = json!({"a": 1.5, "b": "+2", "c": "-0.25", "d": "x"});
        let map = map.as_object().unwrap();
        assert_eq!(f64_field(map, "a", "t").unwrap(), 1.5);
        assert_eq!(f64_field(map, "b", "t").unwrap(), 2.0);
        assert_eq!(f64_field(map, "c", "t").unwrap(), -0.25);
        assert!(f64_field(map, "d", "t").is_err());
        assert!(f64_field(map, "missing", "t").is_err());
    }

    #[test]
    fn optional_numeric_field_treats_null_as_absent() {
        let map = json!({"a": null, "b": 3});
        let map = map.as_object().unwrap();
        assert_eq!(opt_f64_field(map, "a", "t").unwrap(), None);
        assert_eq!(opt_f64_field(map, "b", "t").unwrap(), Some(3.0));
        assert_eq!(opt_f64_field(map, "c", "t").unwrap(), None);
    }
}
