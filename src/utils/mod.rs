//! Utility functions.
//!
//! This module provides:
//! - Text sanitization for values captured from the wire
//! - Timing helpers for per-source latency

pub mod sanitize;
mod timing;

pub use timing::{duration_to_ms, timed};
