//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// All errors are construction-time validation failures; runtime operations
/// (get, set, keys, close) are total and never fail.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity of zero would force every insert to evict itself
    #[error("capacity must be greater than zero")]
    InvalidCapacity,

    /// A zero TTL would expire every entry at the instant it is written
    #[error("ttl must be greater than zero (got {0:?})")]
    InvalidTtl(Duration),

    /// A zero sweep interval would spin the background task
    #[error("sweep interval must be greater than zero")]
    InvalidSweepInterval,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::InvalidCapacity.to_string(),
            "capacity must be greater than zero"
        );
        assert!(CacheError::InvalidTtl(Duration::ZERO)
            .to_string()
            .starts_with("ttl must be greater than zero"));
    }
}
