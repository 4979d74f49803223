//! Pre-construction normalization of raw upstream records.
//!
//! Upstream film and people records regularly carry placeholder entries in
//! their reference lists (`""`, `null`). Every sequence-valued field is
//! stripped of falsy entries before the record is turned into a typed model,
//! so such placeholders never reach [`Film`](super::models::Film) or
//! [`Actor`](super::models::Actor) and never make construction fail.
//! Scalars pass through untouched; nothing is deduplicated or canonicalized.

use serde_json::{Map, Value};

/// Truthiness of a raw JSON value.
///
/// `null`, `false`, numeric zero, the empty string, the empty array and the
/// empty object are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Remove falsy entries from every sequence-valued field, in place.
pub fn strip_empty_references(record: &mut Map<String, Value>) {
    for value in record.values_mut() {
        if let Value::Array(items) = value {
            items.retain(is_truthy);
        }
    }
}
