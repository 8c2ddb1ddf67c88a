//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Pindica using clap.
//! Running `pindica` with no subcommand performs a full run.

pub mod commands;

use crate::config::{load_config, load_config_or_default, PindicaConfig};
use crate::domain::Result;
use clap::{Parser, Subcommand};

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "pindica.toml";

/// Pindica - INE statistical indicator ETL tool
#[derive(Parser, Debug)]
#[command(name = "pindica")]
#[command(version, about, long_about = None)]
#[command(author = "Pindica Contributors")]
pub struct Cli {
    /// Path to configuration file [default: pindica.toml, optional]
    #[arg(short, long, env = "PINDICA_CONFIG", global = true)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PINDICA_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Path of the configuration file in effect
    pub fn config_path(&self) -> &str {
        self.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH)
    }

    /// Loads the configuration
    ///
    /// An explicit `--config` must exist; the default path falls back to
    /// built-in defaults when absent.
    pub fn load_config(&self) -> Result<PindicaConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => load_config_or_default(DEFAULT_CONFIG_PATH),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract and transform in one go (default)
    Run(commands::run::RunArgs),

    /// Discover the year range, fetch every year and store the raw extract
    Extract(commands::extract::ExtractArgs),

    /// Transform the newest raw extract into the clean CSV
    Transform(commands::transform::TransformArgs),

    /// List raw extracts and clean files
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
