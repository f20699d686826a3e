//! Backup command - Copy a YAML file to `<file>.bak`

use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};
use std::path::Path;

use yamlctl::store;

/// Execute the backup command
pub fn execute(file: &str) -> Result<()> {
    let backup_path = store::backup(Path::new(file))?;
    println!(
        "{} {}",
        "Backup created:".if_supports_color(Stdout, |t| t.green()),
        backup_path.display()
    );
    Ok(())
}
