//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: the stored value plus its last-write timestamp.
///
/// The timestamp is monotonic and is refreshed only by writes; reads never
/// touch it, so an entry's eviction and expiration priority depend solely on
/// when it was last set.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    /// The stored value
    pub value: V,
    /// When the entry was last written
    pub written_at: Instant,
}

impl<V> Entry<V> {
    /// Creates an entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            written_at: Instant::now(),
        }
    }

    /// Time elapsed since the entry was last written, relative to `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.written_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl` as of `now`.
    ///
    /// Boundary condition: an entry is expired only when its age is strictly
    /// greater than the TTL, so an entry read exactly at age == ttl is still
    /// returned.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}
