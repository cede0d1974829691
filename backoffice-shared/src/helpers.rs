//! Normalization of loosely shaped API responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a decoded response into a list.
///
/// A bare array is returned as is. An object whose `data` field is an array
/// yields that field. Anything else yields an empty list.
#[must_use]
pub fn to_array(response: Value) -> Vec<Value> {
    match response {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Coerce a decoded response into a typed list.
///
/// Degrades to an empty list when the elements do not decode as `T`.
#[must_use]
pub fn to_typed_array<T: DeserializeOwned>(response: Value) -> Vec<T> {
    serde_json::from_value(Value::Array(to_array(response))).unwrap_or_default()
}

/// Field deserializer that reads `null` as the type's default.
///
/// Use with `#[serde(default, deserialize_with = "null_as_default")]` so a
/// missing field and an explicit `null` behave the same.
///
/// # Errors
/// Fails only when a present, non-null value has the wrong type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
