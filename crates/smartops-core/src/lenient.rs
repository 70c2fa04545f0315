//! Field decoders that never fail on a type mismatch.
//!
//! Server records are only guaranteed to be JSON. A field of the wrong type
//! decodes as absent instead of failing the record it belongs to, and a
//! number sent as a string (`"129.99"`) is read as the number.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Best-effort conversion of a JSON value into `T`.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Null => None,
        Value::String(text) => serde_json::from_value(Value::String(text.clone()))
            .ok()
            .or_else(|| {
                let number = text.trim().parse::<Number>().ok()?;
                serde_json::from_value(Value::Number(number)).ok()
            }),
        other => serde_json::from_value(other).ok(),
    }
}

/// `#[serde(deserialize_with)]` for `Option<T>` fields.
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(from_value(Value::deserialize(deserializer)?))
}

/// `#[serde(deserialize_with)]` for fields that fall back to their default.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// `#[serde(deserialize_with)]` for `Option<Vec<T>>` fields. Items that do
/// not decode are dropped; a non-array value is treated as absent.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(items.into_iter().filter_map(from_value).collect())),
        _ => Ok(None),
    }
}
