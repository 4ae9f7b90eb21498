//! Error handling and processing statistics.
//!
//! This module provides:
//! - Fatal error types (`ReconError`, `InitializationError`)
//! - Categories of recoverable source failures (`ErrorType`)
//! - Processing statistics tracking for degraded sources
//!
//! Only input errors are fatal. Every external source failure is recorded
//! here and degrades to an absent report field.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, ReconError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_reports(), 0);
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::GeoProviderError);
        stats.increment_error(ErrorType::GeoProviderError);
        stats.increment_error(ErrorType::TlsInspectionError);
        assert_eq!(stats.get_error_count(ErrorType::GeoProviderError), 2);
        assert_eq!(stats.get_error_count(ErrorType::TlsInspectionError), 1);
        assert_eq!(stats.total_errors(), 3);
    }

    #[test]
    fn test_processing_stats_concurrent_increments() {
        let stats = Arc::new(ProcessingStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        stats.increment_error(ErrorType::SourceTimeout);
                        stats.increment_reports();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_error_count(ErrorType::SourceTimeout), 800);
        assert_eq!(stats.total_reports(), 800);
    }
}
