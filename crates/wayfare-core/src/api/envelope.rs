//! Normalization of Resource API response bodies.
//!
//! Endpoints have answered with `{ "data": ... }`, with the payload under a
//! resource-named key (`{ "packages": [...] }`, `{ "package": {...} }`) or
//! with the bare array or object. Everything past this module sees only the
//! payload.

use serde_json::{Map, Value};

use crate::models::ResourceKind;

/// Extracts the payload from any of the known envelope shapes.
pub fn extract_payload(kind: ResourceKind, body: Value) -> Value {
    let Value::Object(mut map) = body else {
        return body;
    };

    if let Some(data) = map.remove("data") {
        return data;
    }

    let plural_is_list = map.get(kind.plural_key()).is_some_and(Value::is_array);
    if plural_is_list {
        return map.remove(kind.plural_key()).unwrap_or_default();
    }

    let singular_is_object = map.get(kind.singular_key()).is_some_and(Value::is_object);
    if singular_is_object {
        return map.remove(kind.singular_key()).unwrap_or_default();
    }

    Value::Object(map)
}

/// Error text carried by a failure body, if any.
pub fn error_message(body: &Value) -> Option<String> {
    let candidate = match body {
        Value::Object(map) => map
            .get("error")
            .and_then(|error| match error {
                Value::Object(inner) => inner.get("message"),
                other => Some(other),
            })
            .or_else(|| map.get("message")),
        _ => None,
    };

    candidate
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(String::from)
}

/// Surfaces the store's native key as `id` on every document.
///
/// Documents already carrying `id` keep it; otherwise `_id` is aliased
/// (including `{"$oid": ...}` ids). Numeric ids become strings.
pub fn normalize_id(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_id).collect()),
        Value::Object(map) => Value::Object(normalize_object(map)),
        other => other,
    }
}

fn normalize_object(mut map: Map<String, Value>) -> Map<String, Value> {
    let id = match map.get("id") {
        Some(existing) if !existing.is_null() => id_text(existing),
        _ => map.get("_id").and_then(id_text),
    };
    if let Some(id) = id {
        map.insert("id".into(), Value::String(id));
    }
    map
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(inner) => inner.get("$oid").and_then(Value::as_str).map(String::from),
        _ => None,
    }
}
