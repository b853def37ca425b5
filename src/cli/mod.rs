//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("crossplane-gen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Crossplane XRD generator from Go API types, based on controller-gen")
            .arg(
                clap::Arg::new("debug")
                    .long("debug")
                    .help("Display debug output")
                    .global(true)
                    .action(clap::ArgAction::SetTrue),
            )
            .arg(
                clap::Arg::new("no-color")
                    .long("no-color")
                    .help("No print color")
                    .global(true)
                    .action(clap::ArgAction::SetTrue),
            )
            .arg(
                clap::Arg::new("config")
                    .short('c')
                    .long("config")
                    .help("Configuration file path")
                    .value_name("FILE")
                    .global(true),
            )
            .subcommand(commands::crd::command())
    }

    /// Install the global tracing subscriber according to `--debug` and `--no-color`
    pub fn init_logging(matches: &ArgMatches) {
        let level = if matches.get_flag("debug") {
            "debug"
        } else {
            "info"
        };
        let default_filter =
            format!("crossplane_gen={level},crossplane_xrd={level},crossplane_schemagen={level}");

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
            )
            .with_ansi(!matches.get_flag("no-color"))
            .with_writer(std::io::stdout)
            .init();
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("crd", sub_matches)) => commands::crd::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{Context, Result};
    use std::path::PathBuf;

    const DEFAULT_CONFIG_PATHS: [&str; 2] = [".crossplane-gen.yaml", "crossplane-gen.yaml"];

    /// Get configuration file path from arguments, or the first default file that exists
    pub fn get_config_path(matches: &clap::ArgMatches) -> Option<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Some(PathBuf::from(config_path));
        }

        DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Load configuration from file, falling back to defaults when there is none
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        match get_config_path(matches) {
            Some(path) => crate::Config::from_file(&path)
                .with_context(|| format!("Failed to load configuration from {path:?}")),
            None => Ok(crate::Config::default()),
        }
    }
}
