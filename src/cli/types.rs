//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::infrastructure::logging::{LogConfig, LogFormat, RotationPolicy};

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "mongo-iceberg-sync")]
#[command(about = "Synchronizes MongoDB collections to Apache Iceberg tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "MONGO_ICEBERG_SYNC_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Console log format
    #[arg(long, global = true, value_enum, env = "MONGO_ICEBERG_SYNC_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    /// Also write JSON logs to rolling files in this directory
    #[arg(long, global = true, env = "MONGO_ICEBERG_SYNC_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation
    #[arg(long, global = true, value_enum, default_value = "daily")]
    pub log_rotation: RotationPolicy,
}

impl Cli {
    /// Logging settings selected on the command line.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            log_dir: self.log_dir.clone(),
            rotation: self.log_rotation,
        }
    }
}

/// Daemon subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the configuration and start synchronizing
    Run(ConfigArgs),

    /// Load and validate the configuration, print a summary and exit
    Check(ConfigArgs),
}

/// Arguments shared by commands that load a sync document.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to YAML configuration file
    #[arg(short, long, env = "MONGO_ICEBERG_SYNC_CONFIG")]
    pub config: PathBuf,
}
