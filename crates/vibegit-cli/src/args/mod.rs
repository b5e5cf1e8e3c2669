mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vibegit")]
#[command(about = "Health-check backend and round-log timeline viewer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $VIBEGIT_CONFIG, then <config dir>/vibegit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
