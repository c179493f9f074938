//! Field readers shared by the typed records.
//!
//! A field that is absent, `null` or of an unexpected JSON type reads as
//! missing rather than failing.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::JsonObject;

pub fn string<'a>(data: &'a JsonObject, key: &str) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str)
}

pub fn boolean(data: &JsonObject, key: &str) -> Option<bool> {
    data.get(key).and_then(Value::as_bool)
}

pub fn integer(data: &JsonObject, key: &str) -> Option<i64> {
    data.get(key).and_then(Value::as_i64)
}

/// Webex timestamps are RFC 3339, e.g. `2015-10-18T14:26:16.000Z`.
pub fn datetime(data: &JsonObject, key: &str) -> Option<DateTime<Utc>> {
    string(data, key)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn strings<'a>(data: &'a JsonObject, key: &str) -> Vec<&'a str> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

pub fn value<'a>(data: &'a JsonObject, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| !v.is_null())
}
