//! yamlctl library
//!
//! Core functionality for managing single YAML configuration files whose
//! edit history is kept as `#` comment lines at the top of the file.

pub mod config;
pub mod document;
pub mod error;
pub mod store;

pub use document::{ConfigFile, Properties};
pub use error::ConfigError;
