//! Command-line arguments for the market monitor.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.

use clap::Parser;
use monitor_core::coins::CoinId;
use monitor_core::format::Locale;
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seconds between market ticks.
    #[clap(long, default_value_t = 3)]
    pub interval_secs: u64,

    /// Path to a text file with coin ids to track.
    /// Ids may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub coins: Option<PathBuf>,

    /// Coin selected on startup.
    #[clap(long, value_enum)]
    pub coin: Option<CoinId>,

    /// Currency display convention.
    #[clap(long, value_enum, default_value_t = Locale::En)]
    pub locale: Locale,

    /// Run without the terminal UI, logging one line per coin per tick.
    #[clap(long)]
    pub headless: bool,

    /// Stop headless mode after this many snapshots.
    #[clap(long)]
    pub ticks: Option<u64>,

    /// Print each headless snapshot as a JSON array instead of log lines.
    #[clap(long)]
    pub json: bool,

    /// Write logs to this file instead of stderr.
    #[clap(long)]
    pub log_file: Option<PathBuf>,
}
