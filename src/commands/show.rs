//! Show command - Print the properties (and optionally the changelog) of a YAML file

use anyhow::{Context, Result};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::path::Path;

use yamlctl::document::display_value;
use yamlctl::{store, ConfigError, ConfigFile, Properties};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    changelog: Option<&'a [String]>,
    properties: &'a Properties,
}

/// Execute the show command
pub fn execute(file: &str, format: ShowFormat, with_changelog: bool) -> Result<()> {
    let path = Path::new(file);

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let document = store::load(path)?;
    println!("{}", render(&document, format, with_changelog)?);
    Ok(())
}

/// Render a document in the requested format
pub fn render(document: &ConfigFile, format: ShowFormat, with_changelog: bool) -> Result<String> {
    let output = match format {
        ShowFormat::Table => render_table(document, with_changelog),
        ShowFormat::Json => {
            let json = JsonOutput {
                changelog: with_changelog.then_some(document.changelog.as_slice()),
                properties: &document.data,
            };
            serde_json::to_string_pretty(&json).context("Failed to serialize properties")?
        }
        ShowFormat::Yaml => {
            let text = if with_changelog {
                document.render()?
            } else {
                serde_yaml::to_string(&document.data)?
            };
            text.trim_end().to_string()
        }
    };
    Ok(output)
}

fn render_table(document: &ConfigFile, with_changelog: bool) -> String {
    let mut output = String::new();

    if with_changelog {
        if document.changelog.is_empty() {
            output.push_str("No changelog entries");
        } else {
            output.push_str(&document.changelog.join("\n"));
        }
        output.push_str("\n\n");
    }

    if document.data.is_empty() {
        output.push_str("No properties set");
        return output;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Property"), Cell::new("Value")]);

    for (name, value) in &document.data {
        table.add_row(vec![Cell::new(name), Cell::new(display_value(value))]);
    }

    output.push_str(&table.to_string());
    output.push_str(&format!("\n\n{} properties", document.data.len()));
    output
}
