//! yamlctl: manage single YAML config files with an in-file changelog
//!
//! Every edit prepends a `# [timestamp] ...` line to the file, so the history
//! of a config travels with it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::{OwoColorize, Stream::Stderr};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use yamlctl::ConfigError;

mod commands;

use commands::edit::{EditAction, EditOptions};
use commands::show::ShowFormat;

#[derive(Parser)]
#[command(name = "yamlctl")]
#[command(about = "Manage YAML files.", long_about = None)]
#[command(version)]
struct Cli {
    /// Print debug logs to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new YAML file
    Create {
        /// Path to YAML file
        #[arg(long)]
        file: String,
    },

    /// Remove a YAML file
    Remove {
        /// Path to YAML file
        #[arg(long)]
        file: String,
    },

    /// Edit a YAML file
    Edit {
        /// Path to YAML file
        #[arg(long)]
        file: String,

        /// Edit action
        #[arg(long, value_enum)]
        action: EditAction,

        /// Property name
        #[arg(long)]
        property: String,

        /// Value to set (comma separated for arrays)
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Create a backup of a YAML file
    Backup {
        /// Path to YAML file
        #[arg(long)]
        file: String,
    },

    /// Show the properties of a YAML file
    Show {
        /// Path to YAML file
        #[arg(long)]
        file: String,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = ShowFormat::Table)]
        format: ShowFormat,

        /// Include changelog entries (newest first)
        #[arg(long)]
        changelog: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ConfigError>() {
                Some(config_err) if config_err.is_user_facing() => println!("{}", config_err),
                _ => eprintln!(
                    "{} {:#}",
                    "Error:".if_supports_color(Stderr, |t| t.red()),
                    err
                ),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Create { file } => commands::create::execute(&file)?,

        Commands::Remove { file } => commands::remove::execute(&file)?,

        Commands::Edit {
            file,
            action,
            property,
            value,
        } => {
            let options = EditOptions {
                action,
                property,
                value,
            };
            commands::edit::execute(&file, &options)?;
        }

        Commands::Backup { file } => commands::backup::execute(&file)?,

        Commands::Show {
            file,
            format,
            changelog,
        } => commands::show::execute(&file, format, changelog)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit_set() {
        let cli = Cli::try_parse_from([
            "yamlctl",
            "edit",
            "--file",
            "c.yaml",
            "--action",
            "set",
            "--property",
            "tags",
            "--value",
            "a, b",
        ])
        .unwrap();

        match cli.command {
            Commands::Edit {
                action,
                property,
                value,
                ..
            } => {
                assert_eq!(action, EditAction::Set);
                assert_eq!(property, "tags");
                assert_eq!(value.as_deref(), Some("a, b"));
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        assert!(Cli::try_parse_from([
            "yamlctl",
            "edit",
            "--file",
            "c.yaml",
            "--action",
            "rename",
            "--property",
            "p",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_requires_file() {
        assert!(Cli::try_parse_from(["yamlctl", "create"]).is_err());
    }

    #[test]
    fn test_show_defaults_to_table() {
        let cli = Cli::try_parse_from(["yamlctl", "show", "--file", "c.yaml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: ShowFormat::Table,
                changelog: false,
                ..
            }
        ));
    }
}
