//! Aggregate statistics over history windows.
//!
//! Pure arithmetic helpers behind the statistics panel and the chart axis
//! bounds. Everything here is total and deterministic; empty inputs yield
//! `None` rather than NaN.

use crate::quote::CoinQuote;

/// Max, min and mean over one history window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryStats {
    /// Highest price in the window.
    pub max: f64,
    /// Lowest price in the window.
    pub min: f64,
    /// Arithmetic mean of the window.
    pub mean: f64,
}

impl HistoryStats {
    /// Compute stats over `prices` in a single pass.
    ///
    /// - Returns: `None` when the iterator is empty.
    pub fn from_prices<I>(prices: I) -> Option<HistoryStats>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for price in prices {
            count += 1;
            sum += price;
            min = min.min(price);
            max = max.max(price);
        }
        if count == 0 {
            return None;
        }
        Some(HistoryStats {
            max,
            min,
            mean: sum / count as f64,
        })
    }
}

/// Volatility proxy shown on the statistics panel: |24h change|, in percent.
pub fn volatility(change_24h: f64) -> f64 {
    change_24h.abs()
}

/// Price range spanned by every history window in `quotes`.
///
/// Used for the y-axis bounds of the comparison chart, where all coins share
/// one scale.
///
/// - Returns: `(min, max)`, or `None` when there is no history at all.
pub fn history_bounds(quotes: &[CoinQuote]) -> Option<(f64, f64)> {
    let stats = HistoryStats::from_prices(
        quotes
            .iter()
            .flat_map(|quote| quote.history.iter().map(|point| point.price)),
    )?;
    Some((stats.min, stats.max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coins::CoinId;
    use crate::quote::PricePoint;

    fn quote_with_prices(id: CoinId, prices: &[f64]) -> CoinQuote {
        CoinQuote {
            id,
            name: id.name().to_string(),
            symbol: id.symbol().to_string(),
            price: prices.last().copied().unwrap_or(1.0),
            change_24h: 0.0,
            volume_24h: 0.0,
            market_cap: 0.0,
            history: prices
                .iter()
                .map(|&price| PricePoint {
                    label: "0:00".to_string(),
                    price,
                })
                .collect(),
        }
    }

    #[test]
    fn test_stats_over_small_window() {
        let stats = HistoryStats::from_prices([10.0, 20.0, 30.0]).unwrap();
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.mean, 20.0);
    }

    #[test]
    fn test_stats_of_empty_window_is_none() {
        assert_eq!(HistoryStats::from_prices([]), None);
    }

    #[test]
    fn test_stats_of_single_sample() {
        let stats = HistoryStats::from_prices([42.5]).unwrap();
        assert_eq!(stats.max, 42.5);
        assert_eq!(stats.min, 42.5);
        assert_eq!(stats.mean, 42.5);
    }

    #[test]
    fn test_volatility_is_absolute() {
        assert_eq!(volatility(-3.2), 3.2);
        assert_eq!(volatility(1.7), 1.7);
        assert_eq!(volatility(0.0), 0.0);
    }

    #[test]
    fn test_bounds_span_all_histories() {
        let quotes = vec![
            quote_with_prices(CoinId::Btc, &[100.0, 150.0]),
            quote_with_prices(CoinId::Eth, &[50.0, 120.0]),
        ];
        assert_eq!(history_bounds(&quotes), Some((50.0, 150.0)));
    }

    #[test]
    fn test_bounds_of_empty_set_is_none() {
        assert_eq!(history_bounds(&[]), None);
    }
}
