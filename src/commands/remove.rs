//! Remove command - Delete a YAML file

use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};
use std::path::Path;

use yamlctl::{store, ConfigError};

/// Execute the remove command
///
/// A missing file is reported but is not a failure.
pub fn execute(file: &str) -> Result<()> {
    match store::remove(Path::new(file)) {
        Ok(()) => println!(
            "{} {}",
            "Removed YAML file:".if_supports_color(Stdout, |t| t.green()),
            file
        ),
        Err(err @ ConfigError::NotFound(_)) => println!("{}", err),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_missing_is_ok() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(execute(path.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_remove_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.yaml");
        store::create(&path).unwrap();

        execute(path.to_str().unwrap()).unwrap();
        assert!(!path.exists());
    }
}
