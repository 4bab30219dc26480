//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions (input, lookup, storage, initialization)
//! - Per-batch failure counters keyed by lookup error kind
//!
//! Lookup errors are isolated per item. Storage errors are always recovered by
//! the caller and only logged.

mod stats;
mod types;

// Re-export public API
pub use stats::LookupStats;
pub use types::{InitializationError, InputError, LookupError, LookupErrorKind, StorageError};

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lookup_stats_initialization() {
        let stats = LookupStats::new();
        for kind in LookupErrorKind::iter() {
            assert_eq!(stats.get_count(kind), 0);
        }
        assert_eq!(stats.total(), 0);
        assert!(stats.breakdown().is_empty());
    }

    #[test]
    fn test_lookup_stats_record() {
        let mut stats = LookupStats::new();
        stats.record(&LookupError::EmptyBody);
        stats.record(&LookupError::HttpStatus(StatusCode::INTERNAL_SERVER_ERROR));
        stats.record(&LookupError::HttpStatus(StatusCode::NOT_FOUND));

        assert_eq!(stats.get_count(LookupErrorKind::HttpStatus), 2);
        assert_eq!(stats.get_count(LookupErrorKind::EmptyBody), 1);
        assert_eq!(stats.total(), 3);
        assert_eq!(
            stats.breakdown(),
            vec![
                (LookupErrorKind::HttpStatus, 2),
                (LookupErrorKind::EmptyBody, 1)
            ]
        );
    }
}
