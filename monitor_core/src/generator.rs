//! Market feed thread and event broadcasting.
//!
//! The `MarketFeed` runs a background thread that owns the quote set for a
//! fixed list of `CoinId`s and broadcasts a complete snapshot per tick over
//! `crossbeam_channel`. Consumers (the terminal UI or the headless loop)
//! receive `MarketEvent`s on the data channel passed to `MarketFeed::start`.
//!
//! Event model:
//! - `MarketEvent::Snapshot(Vec<CoinQuote>)` — the full quote set for one tick.
//! - `MarketEvent::Shutdown` — signal for consumers to terminate gracefully.
//!
//! Design notes:
//! - The first snapshot is sent immediately on startup so consumers have data
//!   before the first tick elapses.
//! - Each tick derives a whole new set from the previous one; quotes are
//!   never mutated in place, so every consumer observes consistent sets.
//! - The stop channel is multiplexed with the tick source via `select!`; a
//!   disconnected data channel also stops the thread.

use crossbeam_channel::{Receiver, Sender, select, tick};
use log::info;
use rand::Rng;
use std::thread;
use std::time::Duration;

use crate::coins::CoinId;
use crate::quote::CoinQuote;

/// Message sent by the feed to its consumers.
#[derive(Debug, Clone)]
pub enum MarketEvent {
    /// Complete quote set for one tick.
    Snapshot(Vec<CoinQuote>),
    /// Global shutdown notification for all consumers.
    Shutdown,
}

/// Background market data generator that broadcasts snapshots on a timer.
pub struct MarketFeed {
    coins: Vec<CoinId>,
    interval: Duration,
}

impl MarketFeed {
    /// Create a feed for `coins`, ticking once per `interval`.
    pub fn new(coins: Vec<CoinId>, interval: Duration) -> MarketFeed {
        MarketFeed { coins, interval }
    }

    /// Start the feed thread.
    ///
    /// Sends an initial `Snapshot` right away, then one per tick on
    /// `data_tx`. The thread terminates when either:
    /// - a stop signal arrives on `stop_rx` (or its sender is dropped), in
    ///   which case a final `Shutdown` event is emitted, or
    /// - the data channel is disconnected.
    pub fn start(self, data_tx: Sender<MarketEvent>, stop_rx: Receiver<()>) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            let mut rng = rand::rng();
            let mut quotes = initial_quotes(&self.coins, &mut rng);
            info!(
                "Market feed started: {} coins, tick every {:?}",
                quotes.len(),
                self.interval
            );

            if data_tx.send(MarketEvent::Snapshot(quotes.clone())).is_err() {
                return;
            }

            let ticker = tick(self.interval);
            loop {
                select! {
                    recv(stop_rx) -> _ => {
                        let _ = data_tx.send(MarketEvent::Shutdown);
                        break;
                    },
                    recv(ticker) -> _ => {
                        quotes = next_quotes(&quotes, &mut rng);
                        if data_tx.send(MarketEvent::Snapshot(quotes.clone())).is_err() {
                            break;
                        }
                    }
                }
            }
            info!("Market feed stopped");
        })
    }
}

/// Generate the startup quote set, one quote per coin, in list order.
pub fn initial_quotes<R: Rng>(coins: &[CoinId], rng: &mut R) -> Vec<CoinQuote> {
    coins.iter().map(|&id| CoinQuote::generate(id, rng)).collect()
}

/// Derive the next quote set from `quotes` by advancing each one tick.
pub fn next_quotes<R: Rng>(quotes: &[CoinQuote], rng: &mut R) -> Vec<CoinQuote> {
    quotes.iter().map(|quote| quote.advance(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_initial_quotes_preserve_coin_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let coins = vec![CoinId::Sol, CoinId::Btc];
        let quotes = initial_quotes(&coins, &mut rng);

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].id, CoinId::Sol);
        assert_eq!(quotes[1].id, CoinId::Btc);
    }

    #[test]
    fn test_next_quotes_keep_ids_and_magnitudes() {
        let mut rng = StdRng::seed_from_u64(42);
        let quotes = initial_quotes(&CoinId::ALL, &mut rng);
        let next = next_quotes(&quotes, &mut rng);

        assert_eq!(next.len(), quotes.len());
        for (before, after) in quotes.iter().zip(&next) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.volume_24h, after.volume_24h);
            assert_eq!(before.market_cap, after.market_cap);
            assert!(after.price > 0.0);
        }
    }
}
