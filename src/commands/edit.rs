//! Edit command - Set or remove a top-level property
//!
//! Each edit loads the file (an absent file loads empty), changes one
//! property, prepends one changelog entry and rewrites the file.

use anyhow::Result;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

use yamlctl::document::{changelog, display_value};
use yamlctl::{store, ConfigError, ConfigFile};

/// Edit action
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EditAction {
    Set,
    Remove,
}

/// Edit options
#[derive(Debug, Clone)]
pub struct EditOptions {
    pub action: EditAction,
    pub property: String,
    /// Raw value; comma separated values become a list
    pub value: Option<String>,
}

/// Execute the edit command
pub fn execute(file: &str, options: &EditOptions) -> Result<()> {
    let path = Path::new(file);
    let mut document = store::load(path)?;

    let entry = apply(&mut document, options, &changelog::timestamp())?;
    debug!(%entry, "recorded changelog entry");

    store::save(path, &document)?;

    match options.action {
        EditAction::Set => {
            let value = document
                .get(&options.property)
                .map(display_value)
                .unwrap_or_default();
            println!(
                "{} {} to {} in {}",
                "Set".if_supports_color(Stdout, |t| t.green()),
                options.property,
                value,
                file
            );
        }
        EditAction::Remove => {
            println!(
                "{} {} from {}",
                "Removed".if_supports_color(Stdout, |t| t.green()),
                options.property,
                file
            );
        }
    }

    Ok(())
}

/// Apply an edit to a loaded document and record it in the changelog
///
/// Returns the changelog entry that was prepended. Nothing is changed when a
/// `set` has no value.
pub fn apply(
    document: &mut ConfigFile,
    options: &EditOptions,
    timestamp: &str,
) -> Result<String, ConfigError> {
    let property = options.property.as_str();

    let entry = match options.action {
        EditAction::Set => {
            let raw = options.value.as_deref().ok_or(ConfigError::MissingValue)?;
            let old = document.set_property(property, raw);
            let new = document.get(property).cloned().unwrap_or(Value::Null);
            changelog::set_entry(timestamp, property, old.as_ref(), &new)
        }
        EditAction::Remove => {
            let old = document.remove_property(property);
            changelog::remove_entry(timestamp, property, old.as_ref())
        }
    };

    document.record(entry.clone());
    Ok(entry)
}
