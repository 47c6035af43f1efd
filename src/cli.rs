use clap::{Parser, Subcommand};
use std::path;

use crate::level::LogLevel;

/// Deepest group nesting the `prefix` command renders.
pub const MAX_DEPTH: u16 = 1024;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to levelfmt.toml if present)
    #[arg(long)]
    pub config: Option<path::PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Minimum level for diagnostics
    #[arg(long)]
    pub min_level: Option<LogLevel>,
}

impl Args {
    /// Whether output is colored, given the config file's setting.
    pub fn color(&self, config_color: bool) -> bool {
        config_color && !self.no_color
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the prefix for a level, followed by an optional message
    Prefix {
        level: LogLevel,
        /// Group nesting depth
        #[arg(
            long,
            default_value_t = 0,
            value_parser = clap::value_parser!(u16).range(0..=MAX_DEPTH as i64)
        )]
        depth: u16,
        message: Vec<String>,
    },
    /// Compare the priority of two levels
    Compare { fst: LogLevel, snd: LogLevel },
    /// List all levels in priority order
    Levels,
}
