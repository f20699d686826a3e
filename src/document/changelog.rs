//! Changelog entry formatting
//!
//! Entries look like `# [2024-05-01 12:00:00] set tags ['a', 'b']`. Values are
//! rendered with [`display_value`], which keeps entries identical to those
//! written by earlier versions of the tool.

use chrono::Local;
use serde_yaml::Value;

use crate::config::{CHANGELOG_MARKER, TIMESTAMP_FORMAT};

/// Current local time formatted for a changelog entry
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Entry for a `set` edit
pub fn set_entry(timestamp: &str, property: &str, old: Option<&Value>, new: &Value) -> String {
    let entry = match old {
        Some(old) => format!(
            "{CHANGELOG_MARKER} [{timestamp}] set {property} {} -> {}",
            display_value(old),
            display_value(new)
        ),
        None => format!(
            "{CHANGELOG_MARKER} [{timestamp}] set {property} {}",
            display_value(new)
        ),
    };
    single_line(entry)
}

/// Entry for a `remove` edit; the prior value is appended only when one existed
pub fn remove_entry(timestamp: &str, property: &str, old: Option<&Value>) -> String {
    let mut entry = format!("{CHANGELOG_MARKER} [{timestamp}] remove {property}");
    if let Some(old) = old {
        entry.push(' ');
        entry.push_str(&display_value(old));
    }
    single_line(entry)
}

/// Render a value for changelog entries and console messages
///
/// Top-level strings are shown bare. Everything else uses a literal notation:
/// `['a', 'b']`, `{'k': 1}`, `True`, `None`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => literal(other),
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(mapping) => {
            let pairs: Vec<String> = mapping
                .iter()
                .map(|(k, v)| format!("{}: {}", literal(k), literal(v)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Tagged(tagged) => literal(&tagged.value),
    }
}

/// Single quotes unless the string holds a `'` and no `"`
fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// An entry must stay on one line or it would spill into the YAML body
fn single_line(entry: String) -> String {
    if entry.contains(['\n', '\r']) {
        entry.replace("\r\n", "\\n").replace(['\n', '\r'], "\\n")
    } else {
        entry
    }
}
