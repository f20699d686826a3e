//! Top-level property edits

use serde_yaml::Value;

use super::Properties;

/// Convert a raw CLI value into a property value
///
/// A value containing a comma becomes a sequence of its trimmed parts.
/// Anything else is stored verbatim as a string; `"8080"` and `"true"`
/// stay strings.
pub fn split_value(raw: &str) -> Value {
    if raw.contains(',') {
        Value::Sequence(
            raw.split(',')
                .map(|part| Value::String(part.trim().to_string()))
                .collect(),
        )
    } else {
        Value::String(raw.to_string())
    }
}

/// Set (or overwrite) a property, returning the prior value
///
/// A prior `null` counts as no prior value.
pub fn set_property(data: &mut Properties, name: &str, raw: &str) -> Option<Value> {
    data.insert(name.to_string(), split_value(raw))
        .filter(|old| !old.is_null())
}

/// Remove a property if present, returning the prior value
pub fn remove_property(data: &mut Properties, name: &str) -> Option<Value> {
    data.remove(name).filter(|old| !old.is_null())
}
