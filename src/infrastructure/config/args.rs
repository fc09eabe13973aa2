//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;

/// Command-line arguments, merged over the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "oxiteller",
    version,
    about = "A small ATM demo for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data directory holding the persisted accounts and session.
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Skip seeding the demo account at startup.
    #[arg(long)]
    pub no_seed: bool,
}
