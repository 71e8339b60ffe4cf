//! Helpers for probing loosely-typed JSON payloads.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::pricing::parse_price_value;

/// Return the first key whose value is a non-empty string.
pub(crate) fn first_str(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| value.get(k).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Return the first key whose value is not null, rendered as a string.
///
/// Stops at the first present value even if it renders empty.
pub(crate) fn first_present(value: &Value, keys: &[&str]) -> Option<String> {
    let found = keys
        .iter()
        .filter_map(|k| value.get(k))
        .find(|v| !v.is_null())?;

    match found {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Return the first key holding a boolean.
pub(crate) fn first_bool(value: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter()
        .filter_map(|k| value.get(k).and_then(Value::as_bool))
        .next()
}

/// Objects of the array stored under `key`; anything else yields nothing.
pub(crate) fn objects<'a>(value: Option<&'a Value>, key: &str) -> Vec<&'a Value> {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_array)
        .map(|items| items.iter().filter(|i| i.is_object()).collect())
        .unwrap_or_default()
}

/// Unwrap a value that may have been stored as a JSON-encoded string.
pub(crate) fn decode_embedded(value: Option<&Value>) -> Option<Value> {
    match value? {
        Value::String(s) => serde_json::from_str(s).ok(),
        Value::Null => None,
        other => Some(other.clone()),
    }
}

/// Read a number stored either as a JSON number or as numeric text.
pub(crate) fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_price_value(s),
        _ => None,
    }
}

/// Read a non-negative whole count; fractions are truncated and negative
/// or non-numeric values have no count.
pub(crate) fn count(value: &Value) -> Option<u32> {
    number(value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.trunc().min(f64::from(u32::MAX)) as u32)
}

/// `deserialize_with` for optional amounts that never rejects the payload.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(&Value::deserialize(deserializer)?))
}

/// `deserialize_with` for optional counts that never rejects the payload.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count(&Value::deserialize(deserializer)?))
}
