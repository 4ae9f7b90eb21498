//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, endpoints, limits)
//! - The library `Config` struct and the CLI options that feed it

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Config, GeoProviderConfig, GeoProviderKind, LogFormat, LogLevel};
