//! Error types for config file operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while managing a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `create` target is already present
    #[error("File {} already exists.", .0.display())]
    AlreadyExists(PathBuf),

    /// `remove`, `backup` or `show` target is absent
    #[error("File {} does not exist.", .0.display())]
    NotFound(PathBuf),

    /// `edit --action set` was given no value
    #[error("Value required for set action")]
    MissingValue,

    /// The YAML body parsed to something other than a mapping
    #[error("YAML document is not a mapping of properties")]
    NotAMapping,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is an expected user-facing condition
    ///
    /// These are reported as a plain message on stdout, as opposed to
    /// unexpected failures which go to stderr with their full context.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::AlreadyExists(_) | Self::NotFound(_) | Self::MissingValue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::AlreadyExists(PathBuf::from("c.yaml")).to_string(),
            "File c.yaml already exists."
        );
        assert_eq!(
            ConfigError::NotFound(PathBuf::from("c.yaml")).to_string(),
            "File c.yaml does not exist."
        );
        assert_eq!(
            ConfigError::MissingValue.to_string(),
            "Value required for set action"
        );
    }

    #[test]
    fn test_user_facing_kinds() {
        assert!(ConfigError::MissingValue.is_user_facing());
        assert!(ConfigError::NotFound(PathBuf::from("x")).is_user_facing());
        assert!(!ConfigError::NotAMapping.is_user_facing());
        let io = ConfigError::io("x", std::io::Error::other("boom"));
        assert!(!io.is_user_facing());
    }
}
