//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// webboot - deployment bootstrap for Node web apps
///
/// Installs dependencies and builds the application when their output
/// directories are missing, then starts the server on the platform port.
#[derive(Parser, Debug)]
#[command(name = "webboot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path (defaults to <project>/.webboot.toml)
    #[arg(short, long, env = "WEBBOOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, env = "WEBBOOT_PROJECT")]
    pub project: Option<PathBuf>,

    /// Package manager program to invoke instead of the configured one
    #[arg(long, env = "WEBBOOT_PACKAGE_MANAGER")]
    pub package_manager: Option<String>,

    /// Print the steps that would run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}
