//! Mapping field helpers
//!
//! Field projection and decoding of JSON-encoded columns.

use serde_json::Value;

use crate::types::Mapping;

/// Return the entries of `source` whose key is listed in `fields`
///
/// Names in `fields` that `source` does not have are skipped. Source order is kept.
///
/// ```
/// use fetsch::{mapping_from_value, only};
/// use serde_json::json;
///
/// let user = mapping_from_value(json!({"id": 1, "name": "Bo", "password": "x"})).unwrap();
/// let public = only(&["id", "name", "email"], &user);
/// assert_eq!(serde_json::Value::Object(public), json!({"id": 1, "name": "Bo"}));
/// ```
pub fn only<S: AsRef<str>>(fields: &[S], source: &Mapping) -> Mapping {
    source
        .iter()
        .filter(|(key, _)| fields.iter().any(|f| f.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Decode JSON-encoded fields of `data`
///
/// `field_defaults` names the JSON columns and the value to use when a column is
/// null, an empty string, or not valid JSON. Strings are parsed; other non-null
/// values are taken as already decoded. Keys that are not in `field_defaults` are
/// copied as they are, and defaults are never added for keys missing from `data`.
///
/// ```
/// use fetsch::{mapping_from_value, parse_json_fields};
/// use serde_json::json;
///
/// let defaults = mapping_from_value(json!({"meta": {}})).unwrap();
/// let row = mapping_from_value(json!({"id": 1, "meta": "{\"a\":1}"})).unwrap();
/// let parsed = parse_json_fields(&defaults, &row);
/// assert_eq!(parsed["meta"], json!({"a": 1}));
/// ```
pub fn parse_json_fields(field_defaults: &Mapping, data: &Mapping) -> Mapping {
    data.iter()
        .map(|(key, value)| {
            let value = match field_defaults.get(key) {
                Some(default) => decode_field(key, value, default),
                None => value.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

fn decode_field(key: &str, value: &Value, default: &Value) -> Value {
    match value {
        Value::Null => default.clone(),
        Value::String(s) if s.is_empty() => default.clone(),
        Value::String(s) => match serde_json::from_str(s) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(
                    target: "fetsch.json",
                    key,
                    error = %e,
                    "invalid JSON in field, using default"
                );
                default.clone()
            }
        },
        other => other.clone(),
    }
}
