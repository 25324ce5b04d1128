//!
//! Core types and simulation logic for the crypto monitor.
//!
//! This crate aggregates everything the terminal app renders from:
//! - `error` — unified error type `MonitorError` used across the workspace.
//! - `result` — handy `Result<T, MonitorError>` alias.
//! - `coins` — the tracked coin set and coins-file parsing helpers.
//! - `quote` — the `CoinQuote` model and both random-walk noise models.
//! - `generator` — background market feed broadcasting per-tick snapshots.
//! - `stats` — aggregates (min/max/mean) over the rolling history window.
//! - `format` — currency, compact-number and percent formatting.
#![warn(missing_docs)]
pub mod coins;
pub mod error;
pub mod format;
pub mod generator;
pub mod quote;
pub mod result;
pub mod stats;

pub use coins::CoinId;
pub use error::MonitorError;
pub use quote::CoinQuote;
pub use result::Result;
