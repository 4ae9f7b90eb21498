//! Timing helpers for per-source latency reporting.

use std::future::Future;
use std::time::{Duration, Instant};

/// Converts a duration to whole milliseconds, saturating at `u64::MAX`.
pub fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Awaits `fut` and returns its output with the elapsed wall time in milliseconds.
pub async fn timed<F: Future>(fut: F) -> (F::Output, u64) {
    let start = Instant::now();
    let output = fut.await;
    (output, duration_to_ms(start.elapsed()))
}
