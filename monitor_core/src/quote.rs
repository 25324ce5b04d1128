//! Coin quote data model and the two random-walk noise models.
//!
//! A `CoinQuote` is everything the dashboard renders for one asset: identity,
//! the current price, the accumulated 24h change, volume/market cap, and a
//! fixed-length rolling history window used for sparklines, charts and
//! aggregate statistics. This module also provides the price synthesis
//! helpers: one model for the initial draw and a narrower multiplicative
//! model for per-tick updates. The two are intentionally different and are
//! not meant to be unified.

use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::coins::CoinId;
use crate::error::MonitorError;

/// Number of samples kept in the rolling history window.
pub const HISTORY_LEN: usize = 24;

/// Half-width of the initial 24h-change draw, in percent of the base price.
const INITIAL_CHANGE_RANGE_PCT: f64 = 7.5;
/// Half-width of the noise applied to each synthetic history sample.
const HISTORY_VARIANCE: f64 = 0.025;
/// Half-width of the per-tick price delta, in percent of the current price.
const TICK_DELTA_RANGE_PCT: f64 = 0.25;
/// Upper bound (exclusive) of the synthetic 24h volume draw.
const VOLUME_RANGE: f64 = 10_000_000_000.0;
/// Upper bound (exclusive) of the circulating-supply draw behind market cap.
const SUPPLY_RANGE: f64 = 20_000_000.0;

/// One sample of the rolling history window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    /// Timestamp label: hour-of-day ("14:00") for synthetic samples,
    /// wall-clock "%H:%M" for tick-appended ones.
    pub label: String,
    /// Price at that sample, rounded to cents.
    pub price: f64,
}

/// Market quote for a single tracked coin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinQuote {
    /// Stable identifier of the coin.
    pub id: CoinId,
    /// Human-readable asset name.
    pub name: String,
    /// Exchange-style ticker symbol.
    pub symbol: String,
    /// Current price in currency units.
    pub price: f64,
    /// Accumulated 24-hour change in percent; unbounded, may be negative.
    pub change_24h: f64,
    /// Synthetic 24-hour trading volume in currency units.
    pub volume_24h: f64,
    /// Synthetic market capitalization in currency units.
    pub market_cap: f64,
    /// Rolling history window, always `HISTORY_LEN` samples long.
    pub history: Vec<PricePoint>,
}

impl CoinQuote {
    /// Generate the startup quote for `id` using the wide noise model.
    ///
    /// The 24h change is drawn uniformly from ±7.5 % and applied to the
    /// coin's base price; volume and market cap magnitudes are drawn
    /// independently. The history window is synthesized by perturbing the
    /// current price with small noise per sample, labeled by hour of day.
    ///
    /// - id: coin to generate the quote for.
    /// - rng: randomness source (seedable in tests).
    /// - Returns: a fully-populated quote with a `HISTORY_LEN` window.
    pub fn generate<R: Rng>(id: CoinId, rng: &mut R) -> CoinQuote {
        let change_24h = rng.random_range(-INITIAL_CHANGE_RANGE_PCT..INITIAL_CHANGE_RANGE_PCT);
        let price = id.base_price() * (1.0 + change_24h / 100.0);

        let history = (0..HISTORY_LEN)
            .map(|hour| {
                let variance = rng.random_range(-HISTORY_VARIANCE..HISTORY_VARIANCE);
                PricePoint {
                    label: format!("{}:00", hour),
                    price: round_to_cents(price * (1.0 + variance)),
                }
            })
            .collect();

        CoinQuote {
            id,
            name: id.name().to_string(),
            symbol: id.symbol().to_string(),
            price,
            change_24h,
            volume_24h: rng.random_range(0.0..VOLUME_RANGE),
            market_cap: price * rng.random_range(0.0..SUPPLY_RANGE),
            history,
        }
    }

    /// Calculate the next price using the narrow per-tick random walk.
    ///
    /// The delta is sampled uniformly from ±0.25 % and applied
    /// multiplicatively to `current_price`; the result is clamped to a
    /// minimum positive value to avoid non-sensical zero/negative prices.
    ///
    /// - Returns: the new price and the drawn delta in percent.
    pub fn next_price<R: Rng>(current_price: f64, rng: &mut R) -> (f64, f64) {
        let delta_pct = rng.random_range(-TICK_DELTA_RANGE_PCT..TICK_DELTA_RANGE_PCT);
        let new_price = (current_price * (1.0 + delta_pct / 100.0)).max(0.01);
        (new_price, delta_pct)
    }

    /// Return this quote advanced by one tick.
    ///
    /// Applies [`Self::next_price`] to the current price, accumulates the
    /// drawn delta into the 24h change, and shifts the history window: the
    /// oldest sample is dropped exactly as a new one, labeled with the local
    /// wall-clock time, is appended. Volume and market cap carry over
    /// unchanged.
    pub fn advance<R: Rng>(&self, rng: &mut R) -> CoinQuote {
        let (price, delta_pct) = Self::next_price(self.price, rng);

        let mut history: Vec<PricePoint> = self.history.iter().skip(1).cloned().collect();
        history.push(PricePoint {
            label: Local::now().format("%H:%M").to_string(),
            price: round_to_cents(price),
        });

        CoinQuote {
            id: self.id,
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            price,
            change_24h: self.change_24h + delta_pct,
            volume_24h: self.volume_24h,
            market_cap: self.market_cap,
            history,
        }
    }
}

/// Encode a whole snapshot as a JSON array string.
pub fn snapshot_to_json(quotes: &[CoinQuote]) -> Result<String, MonitorError> {
    let json = serde_json::to_string(quotes)?;
    Ok(json)
}

/// Round a price to two fractional digits, as shown on charts.
fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_populates_identity_and_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let quote = CoinQuote::generate(CoinId::Btc, &mut rng);

        assert_eq!(quote.id, CoinId::Btc);
        assert_eq!(quote.name, "Bitcoin");
        assert_eq!(quote.symbol, "BTC");
        assert_eq!(quote.history.len(), HISTORY_LEN);
        assert_eq!(quote.history[0].label, "0:00");
        assert_eq!(quote.history[23].label, "23:00");
        assert!(quote.price > 0.0);
        assert!(quote.volume_24h >= 0.0);
        assert!(quote.market_cap >= 0.0);
    }

    #[test]
    fn test_generate_price_stays_inside_the_draw_band() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let quote = CoinQuote::generate(CoinId::Eth, &mut rng);
            let base = CoinId::Eth.base_price();
            assert!(quote.price > base * 0.925 && quote.price < base * 1.075);
            assert!(quote.change_24h.abs() < INITIAL_CHANGE_RANGE_PCT);
        }
    }

    #[test]
    fn test_advance_shifts_the_window_by_one() {
        let mut rng = StdRng::seed_from_u64(11);
        let quote = CoinQuote::generate(CoinId::Sol, &mut rng);
        let next = quote.advance(&mut rng);

        assert_eq!(next.history.len(), HISTORY_LEN);
        // Oldest sample dropped exactly when a new one is appended.
        assert_eq!(next.history[0].label, quote.history[1].label);
        assert_eq!(next.history[0].price, quote.history[1].price);

        let last = next.history.last().unwrap();
        assert_eq!(last.price, (next.price * 100.0).round() / 100.0);
        assert_eq!(last.label.len(), 5);
        assert!(last.label.contains(':'));
    }

    #[test]
    fn test_advance_accumulates_bounded_deltas() {
        let mut rng = StdRng::seed_from_u64(3);
        let quote = CoinQuote::generate(CoinId::Bnb, &mut rng);
        let next = quote.advance(&mut rng);

        let delta = next.change_24h - quote.change_24h;
        assert!(delta.abs() < TICK_DELTA_RANGE_PCT);
        assert!((next.price - quote.price * (1.0 + delta / 100.0)).abs() < 1e-9);
        assert_eq!(next.volume_24h, quote.volume_24h);
        assert_eq!(next.market_cap, quote.market_cap);
    }

    #[test]
    fn test_price_stays_positive_over_many_ticks() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut quote = CoinQuote::generate(CoinId::Btc, &mut rng);
        for _ in 0..10_000 {
            quote = quote.advance(&mut rng);
            assert!(quote.price >= 0.01);
            assert_eq!(quote.history.len(), HISTORY_LEN);
        }
    }

    #[test]
    fn test_next_price_clamps_at_the_floor() {
        let mut rng = StdRng::seed_from_u64(1);
        let (price, _) = CoinQuote::next_price(0.0001, &mut rng);
        assert!(price >= 0.01);
    }

    #[test]
    fn test_snapshot_json_uses_lowercase_ids() {
        let mut rng = StdRng::seed_from_u64(5);
        let quotes = vec![
            CoinQuote::generate(CoinId::Btc, &mut rng),
            CoinQuote::generate(CoinId::Eth, &mut rng),
        ];
        let json = snapshot_to_json(&quotes).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"id\":\"btc\""));
        assert!(json.contains("\"symbol\":\"ETH\""));
    }
}
