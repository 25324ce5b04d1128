//! Headless feed consumer: logs quotes instead of drawing.
//!
//! Subscribes to the same market channel as the UI and emits one `info!`
//! line per coin per snapshot, or one JSON array per snapshot with `--json`.
//! Runs until the snapshot limit is reached, the feed shuts down, or the
//! Ctrl-C flag flips.

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::info;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use monitor_core::generator::MarketEvent;
use monitor_core::quote::{CoinQuote, snapshot_to_json};
use monitor_core::{MonitorError, Result};

/// How long one receive waits before re-checking the shutdown flag.
const RECV_TIMEOUT: Duration = Duration::from_millis(500);

/// Consume the feed until `limit` snapshots were printed (if given), the
/// feed shuts down, or `shutdown` flips.
pub fn run_headless(
    market_rx: &Receiver<MarketEvent>,
    shutdown: Arc<AtomicBool>,
    limit: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut seen = 0u64;

    while !shutdown.load(Ordering::Relaxed) {
        if limit.is_some_and(|limit| seen >= limit) {
            break;
        }
        match market_rx.recv_timeout(RECV_TIMEOUT) {
            Ok(MarketEvent::Snapshot(quotes)) => {
                seen += 1;
                print_snapshot(&quotes, json)?;
            }
            Ok(MarketEvent::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(e) => return Err(MonitorError::ChannelRecv(e.to_string())),
        }
    }
    info!("Headless loop stopping after {} snapshots", seen);
    Ok(())
}

fn print_snapshot(quotes: &[CoinQuote], json: bool) -> Result<()> {
    if json {
        println!("{}", snapshot_to_json(quotes)?);
        return Ok(());
    }
    for quote in quotes {
        info!(
            "QUOTE: {} Price={:.2} Change={:+.2}% Volume={:.0} Cap={:.0}",
            quote.symbol, quote.price, quote.change_24h, quote.volume_24h, quote.market_cap
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use monitor_core::coins::CoinId;
    use monitor_core::generator::initial_quotes;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snapshot() -> MarketEvent {
        let mut rng = StdRng::seed_from_u64(17);
        MarketEvent::Snapshot(initial_quotes(&CoinId::ALL, &mut rng))
    }

    #[test]
    fn test_loop_stops_at_the_snapshot_limit() {
        let (tx, rx) = unbounded();
        tx.send(snapshot()).unwrap();
        tx.send(snapshot()).unwrap();
        tx.send(snapshot()).unwrap();

        let shutdown = Arc::new(AtomicBool::new(false));
        run_headless(&rx, shutdown, Some(2), false).unwrap();
        // The third snapshot stays in the channel.
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn test_loop_stops_on_the_shutdown_event() {
        let (tx, rx) = unbounded();
        tx.send(snapshot()).unwrap();
        tx.send(MarketEvent::Shutdown).unwrap();

        let shutdown = Arc::new(AtomicBool::new(false));
        run_headless(&rx, shutdown, None, false).unwrap();
    }

    #[test]
    fn test_preset_shutdown_flag_skips_the_loop() {
        let (tx, rx) = unbounded();
        tx.send(snapshot()).unwrap();

        let shutdown = Arc::new(AtomicBool::new(true));
        run_headless(&rx, shutdown, None, false).unwrap();
        assert_eq!(rx.len(), 1);
    }
}
