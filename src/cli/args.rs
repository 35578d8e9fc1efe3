//! Command-line argument definitions for the campus energy service
//!
//! This module defines the CLI interface using the clap derive API.
//! Command-line values override the TOML configuration file.

use crate::config::AppConfig;
use crate::{EnergyError, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the campus energy service
///
/// Serves hourly energy-source readings from the operator-maintained CSV
/// and lets operators inspect how the file's timestamps are interpreted.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "campus-energy",
    version,
    about = "Hourly energy-source readings for the campus room-booking app",
    long_about = "Reads the energy-source CSV (one row per hour ending), normalizes provider \
                  timestamps such as '11/9/2025 12 a.m. EST' to hour buckets and serves the \
                  readings for a requested hour over HTTP. A manual override can be pushed \
                  to supersede the CSV until it is replaced, cleared or the server restarts."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the readings for one hour from the CSV
    Query(QueryArgs),
    /// Report which hours the CSV covers and how its timestamps normalize
    Inspect(InspectArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct CommonArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/campus-energy/config.toml and falls back to defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Path to the energy CSV, overriding the configuration
    #[arg(long = "csv", value_name = "PATH", help = "Path to the energy CSV")]
    pub csv_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Address to bind
    #[arg(long = "host", value_name = "HOST", help = "Address to bind")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short = 'p', long = "port", value_name = "PORT", help = "Port to listen on")]
    pub port: Option<u16>,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Hour of day (0-23); invalid or absent values use the current hour
    #[arg(long = "hour", value_name = "HOUR", help = "Hour of day (0-23)")]
    pub hour: Option<String>,

    /// Output format
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of raw timestamps to show
    #[arg(long = "samples", value_name = "COUNT", help = "Number of raw timestamps to show")]
    pub samples: Option<usize>,

    /// Output format
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable coloured output
    Human,
    /// JSON output
    Json,
}

impl Args {
    /// Subcommand to run; `None` means show help
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Serve(args) => &args.common,
            Commands::Query(args) => &args.common,
            Commands::Inspect(args) => &args.common,
        }
    }
}

impl CommonArgs {
    /// Validate shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(EnergyError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Load the configuration file and apply the CSV override
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config_file.as_deref())?;
        if let Some(csv_path) = &self.csv_path {
            config.csv_path = csv_path.clone();
        }
        Ok(config)
    }
}

impl ServeArgs {
    /// Apply host/port overrides on top of a loaded configuration
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}

impl InspectArgs {
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(samples) = self.samples {
            config.sample_size = samples;
        }
        config
    }
}
