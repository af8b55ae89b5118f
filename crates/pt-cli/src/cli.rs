//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Daily prayer times in the terminal.
///
/// Shows the current prayer, a countdown to the next one and today's Hijri
/// date. Timings are fetched once a day and cached.
#[derive(Debug, Parser)]
#[command(name = "pt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print only the countdown to the next prayer.
    #[arg(short = 'a', long)]
    pub short: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the current prayer and the countdown to the next (default).
    Status,

    /// List today's prayer times.
    Times {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Fetch today's timings, replacing the cache.
    Refresh,
}
