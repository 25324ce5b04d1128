//! Crypto Monitor — a terminal dashboard for simulated cryptocurrency quotes.
//!
//! Renders a card row, a detail chart, a statistics panel and a multi-coin
//! comparison view from synthetic market data refreshed on a fixed timer.
//! A background feed thread owns the quote set and broadcasts a snapshot per
//! tick; the main thread multiplexes those snapshots with keyboard input and
//! does all drawing. `--headless` swaps the UI for a logging consumer of the
//! same feed.
//!
//! Usage example (CLI):
//! ```bash
//! monitor_app --interval-secs 3 --locale ru
//! monitor_app --headless --ticks 10 --json
//! ```
//!
//! The optional coins file lists ids separated by commas, spaces, or new
//! lines. See `monitor_core::coins` for details.
#![warn(missing_docs)]
mod app;
mod args;
mod headless;
mod input;
mod tui;
mod ui;

use crate::app::App;
use crate::args::Args;
use crate::input::InputListener;
use clap::Parser;
use crossbeam_channel::unbounded;
use log::{error, info};
use monitor_core::coins::{CoinId, CoinParser};
use monitor_core::generator::MarketFeed;
use monitor_core::{MonitorError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_file.as_deref(), args.headless)?;

    let coins = resolve_coins(args.coins.as_deref())?;
    if coins.is_empty() {
        return Err(MonitorError::Format(
            "the coin list is empty; nothing to track".to_string(),
        ));
    }
    info!("Tracking coins: {:?}", coins);

    let selected = args.coin.unwrap_or(coins[0]);
    // A zero interval would make the tick channel spin.
    let interval = Duration::from_secs(args.interval_secs.max(1));

    let (market_tx, market_rx) = unbounded();
    let (stop_tx, stop_rx) = unbounded();
    let feed_handle = MarketFeed::new(coins, interval).start(market_tx, stop_rx);

    let result = if args.headless {
        let shutdown = Arc::new(AtomicBool::new(false));
        {
            let shutdown = shutdown.clone();
            ctrlc::set_handler(move || {
                info!("Ctrl+C received. Shutting down...");
                shutdown.store(true, Ordering::SeqCst);
            })
            .map_err(|e| MonitorError::Format(format!("Failed to set Ctrl+C handler: {}", e)))?;
        }
        info!("Headless mode running. Press Ctrl+C to exit.");
        headless::run_headless(&market_rx, shutdown, args.ticks, args.json)
    } else {
        let (input_tx, input_rx) = unbounded();
        InputListener::start(input_tx);
        let mut app = App::new(selected, args.locale);
        tui::run_tui(&mut app, &market_rx, &input_rx)
    };

    let shutdown_result = stop_tx
        .send(())
        .map_err(|e| MonitorError::ChannelSend(e.to_string()));
    if feed_handle.join().is_err() {
        error!("Market feed thread panicked");
    }
    result.and(shutdown_result)
}

/// Read the tracked coin set from `path`, or fall back to the built-in list.
fn resolve_coins(path: Option<&Path>) -> Result<Vec<CoinId>> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            CoinId::parse_from_file(BufReader::new(file))
        }
        None => Ok(CoinId::ALL.to_vec()),
    }
}

/// Configure logging for the selected mode.
///
/// With `--log-file` all logs go to that file. Without it, headless mode
/// logs to stderr; the TUI silences logging entirely, since stderr would
/// bleed into the alternate screen.
fn init_logger(log_file: Option<&Path>, headless: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(path) => {
            builder
                .filter_level(log::LevelFilter::Info)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
        }
        None if headless => {
            builder
                .filter_level(log::LevelFilter::Info)
                .parse_default_env();
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
    Ok(())
}
