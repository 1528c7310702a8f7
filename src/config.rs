//! Configuration Module
//!
//! Typed construction parameters for the cache. There is deliberately no
//! environment or file binding: capacity and TTL are the whole configuration
//! surface, and callers pass them explicitly.

use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache construction parameters.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Maximum entry lifetime after its last write
    pub ttl: Duration,
    /// Interval between background expiration sweeps
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a config with the sweep interval defaulting to the TTL,
    /// matching a sweeper that fires once per entry lifetime.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            sweep_interval: ttl,
        }
    }

    /// Overrides the sweep interval, e.g. to poll finer than the TTL so
    /// expired entries are reclaimed with less latency.
    pub fn sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`CacheError::InvalidCapacity`] when capacity is zero
    /// - [`CacheError::InvalidTtl`] when the TTL is zero
    /// - [`CacheError::InvalidSweepInterval`] when the sweep interval is zero
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidCapacity);
        }
        if self.ttl.is_zero() {
            return Err(CacheError::InvalidTtl(self.ttl));
        }
        if self.sweep_interval.is_zero() {
            return Err(CacheError::InvalidSweepInterval);
        }
        Ok(())
    }
}
