//! Error types shared between the core crate and the terminal app.
//!
//! The `MonitorError` enum unifies common failure cases for I/O,
//! serialization, channel communication, and configuration parsing, allowing
//! crates to propagate a single error type.

use std::io;

use thiserror::Error;

/// Unified error type shared by the core crate and the app.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// I/O error originating from the standard library, terminal or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing the coins file into `CoinId` values.
    #[error("Parse coins file error: {0}")]
    ParseCoinsFile(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Crossbeam/channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Crossbeam/channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}
