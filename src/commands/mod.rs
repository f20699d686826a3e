//! CLI commands

pub mod backup;
pub mod create;
pub mod edit;
pub mod remove;
pub mod show;
