//! Changelog-prefixed YAML documents
//!
//! A managed file is a block of `#` changelog lines (newest first) followed by
//! a YAML mapping of top-level properties:
//!
//! ```text
//! # [2024-05-01 12:00:00] set tags ['a', 'b']
//! tags:
//! - a
//! - b
//! ```

pub mod changelog;
pub mod property;

use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::config::CHANGELOG_MARKER;
use crate::error::ConfigError;

pub use changelog::display_value;
pub use property::{remove_property, set_property, split_value};

/// Top-level properties, kept sorted by name
pub type Properties = BTreeMap<String, Value>;

/// A config file split into its changelog and its data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Changelog lines, most recent first, each including its leading `#`
    pub changelog: Vec<String>,
    /// Property mapping
    pub data: Properties,
}

impl ConfigFile {
    /// Parse file text into changelog and data
    ///
    /// Only the contiguous `#` lines at the top become changelog entries, but
    /// every line starting with `#` is dropped from the YAML body, including
    /// lines inside block scalars further down the file.
    ///
    /// Properties are keyed by string. Number and boolean keys are converted,
    /// so `8080: http` is written back as `'8080': http` on the next save even
    /// when that key was not edited. Null, sequence and mapping keys are
    /// rejected with [`ConfigError::NotAMapping`].
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let lines: Vec<&str> = text.split_inclusive('\n').collect();

        let changelog = lines
            .iter()
            .take_while(|line| is_changelog_line(line))
            .map(|line| line.trim_end().to_string())
            .collect();

        let body: String = lines
            .iter()
            .filter(|line| !is_changelog_line(line))
            .copied()
            .collect();

        Ok(Self {
            changelog,
            data: parse_body(&body)?,
        })
    }

    /// Render the file text: changelog lines, then the YAML mapping
    pub fn render(&self) -> Result<String, ConfigError> {
        let mut out = String::new();
        for entry in &self.changelog {
            out.push_str(entry);
            out.push('\n');
        }
        out.push_str(&serde_yaml::to_string(&self.data)?);
        Ok(out)
    }

    /// Get a property value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Set a property from a raw CLI value, returning the prior value
    pub fn set_property(&mut self, name: &str, raw: &str) -> Option<Value> {
        property::set_property(&mut self.data, name, raw)
    }

    /// Remove a property, returning the prior value
    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        property::remove_property(&mut self.data, name)
    }

    /// Prepend a changelog entry
    pub fn record(&mut self, entry: String) {
        self.changelog.insert(0, entry);
    }
}

fn is_changelog_line(line: &str) -> bool {
    line.starts_with(CHANGELOG_MARKER)
}

fn parse_body(body: &str) -> Result<Properties, ConfigError> {
    if body.trim().is_empty() {
        return Ok(Properties::new());
    }

    match serde_yaml::from_str::<Value>(body)? {
        Value::Null => Ok(Properties::new()),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| key_to_string(key).map(|key| (key, value)))
            .collect(),
        _ => Err(ConfigError::NotAMapping),
    }
}

/// Scalar keys are accepted and stringified (`1: x` becomes `"1"`)
fn key_to_string(key: Value) -> Result<String, ConfigError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ConfigError::NotAMapping),
    }
}
