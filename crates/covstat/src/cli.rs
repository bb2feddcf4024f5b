//! Command line arguments.

use clap::{Parser, Subcommand};
use covstat_config::Config;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Also write the records to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Also write the records to this JSON file (ignored when --csv is given)
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configuration file
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Directory the charts are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Optional subcommand; without one the dashboard report runs
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query the public statistics API and print the JSON body
    Stats,
}

impl Args {
    /// Fold command line overrides into a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory.clone_from(dir);
        }
    }
}
