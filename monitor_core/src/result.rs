//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `MonitorError`, so functions can simply return `Result<T>`.

use crate::error::MonitorError;

/// Workspace-wide `Result` alias with `MonitorError` as the default error.
pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
