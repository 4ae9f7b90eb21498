//! Processing statistics tracking.
//!
//! Thread-safe counters of degraded sources, shared by every report produced
//! by one engine.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe processing statistics tracker.
///
/// Tracks recoverable source failures using atomic counters, allowing
/// concurrent access from parallel reports. All types are initialized to zero
/// on creation.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    reports: AtomicUsize,
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        ProcessingStats {
            errors,
            reports: AtomicUsize::new(0),
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Records one assembled report.
    pub fn increment_reports(&self) {
        self.reports.fetch_add(1, Ordering::Relaxed);
    }

    /// Current count for one error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Sum of all error counters.
    pub fn total_errors(&self) -> usize {
        self.errors
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    /// Number of reports assembled so far.
    pub fn total_reports(&self) -> usize {
        self.reports.load(Ordering::Relaxed)
    }

    /// Logs every non-zero counter at info level.
    pub fn log_summary(&self) {
        for error_type in ErrorType::iter() {
            let count = self.get_error_count(error_type);
            if count > 0 {
                log::info!("{}: {}", error_type, count);
            }
        }
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
