//! Tracked coins and helpers for parsing them from files and CLI.
//!
//! The `CoinId` enum covers the fixed set of simulated assets and supports
//! parsing from strings (case-insensitive) as well as `clap` value
//! enumeration for CLI options. The `CoinParser` trait adds a convenience
//! method to parse a coin list from any `BufRead` source, with ids separated
//! by commas, spaces, or new lines.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use strum_macros::{Display, EnumString};

use crate::error::MonitorError;

/// Trait providing file parsing for coin ids.
pub trait CoinParser {
    /// Parses coin ids from a buffered reader.
    ///
    /// Tokens may be separated by commas, spaces, or new lines; matching is
    /// case-insensitive and duplicates are dropped while preserving the
    /// first occurrence order. Returns an error if any token is not a known
    /// coin id.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<CoinId>, MonitorError>;
}

impl CoinParser for CoinId {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, MonitorError> {
        let mut coins = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(MonitorError::Io)?;
            for token in line.split(',').flat_map(str::split_whitespace) {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }

                match token.parse::<Self>() {
                    Ok(coin) => {
                        if !coins.contains(&coin) {
                            coins.push(coin);
                        }
                    }
                    Err(_) => {
                        return Err(MonitorError::ParseCoinsFile(format!(
                            "unknown coin id '{}'",
                            token
                        )));
                    }
                }
            }
        }
        Ok(coins)
    }
}

/// Set of simulated coins tracked by the monitor.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CoinId {
    /// Bitcoin.
    Btc,
    /// Ethereum.
    Eth,
    /// Binance Coin.
    Bnb,
    /// Solana.
    Sol,
}

impl CoinId {
    /// All coins in their default display order.
    pub const ALL: [CoinId; 4] = [CoinId::Btc, CoinId::Eth, CoinId::Bnb, CoinId::Sol];

    /// Human-readable asset name.
    pub fn name(&self) -> &'static str {
        match self {
            CoinId::Btc => "Bitcoin",
            CoinId::Eth => "Ethereum",
            CoinId::Bnb => "Binance Coin",
            CoinId::Sol => "Solana",
        }
    }

    /// Exchange-style ticker symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            CoinId::Btc => "BTC",
            CoinId::Eth => "ETH",
            CoinId::Bnb => "BNB",
            CoinId::Sol => "SOL",
        }
    }

    /// Reference price the initial random draw is centered on.
    pub fn base_price(&self) -> f64 {
        match self {
            CoinId::Btc => 43_250.0,
            CoinId::Eth => 2_280.0,
            CoinId::Bnb => 320.0,
            CoinId::Sol => 98.0,
        }
    }
}
