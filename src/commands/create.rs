//! Create command - Create a new, empty YAML file

use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};
use std::path::Path;

use yamlctl::store;

/// Execute the create command
pub fn execute(file: &str) -> Result<()> {
    store::create(Path::new(file))?;
    println!(
        "{} {}",
        "Created YAML file:".if_supports_color(Stdout, |t| t.green()),
        file
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use yamlctl::ConfigError;

    #[test]
    fn test_create_twice() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.yaml");
        let file = path.to_str().unwrap();

        execute(file).unwrap();
        let err = execute(file).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::AlreadyExists(_))
        ));
    }
}
