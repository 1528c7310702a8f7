//! Cache Store Module
//!
//! The storage table: a HashMap of timestamped entries plus the capacity
//! eviction and expiration scans. The store is a plain synchronous structure;
//! [`Cache`](crate::cache::Cache) wraps it in a reader/writer lock and owns
//! the sweeper that calls [`CacheStore::remove_expired`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheStats, Entry, StatsSnapshot};

// == Cache Store ==
/// Bounded key/value table with oldest-write eviction and TTL filtering.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, Entry<V>>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Maximum entry lifetime after its last write
    ttl: Duration,
    /// Performance counters, shared with the owning handle
    stats: Arc<CacheStats>,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// Parameter validation lives in [`CacheConfig`](crate::config::CacheConfig);
    /// the store itself accepts whatever it is given.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            ttl,
            stats: Arc::new(CacheStats::new()),
        }
    }

    // == Get ==
    /// Looks up a value by key.
    ///
    /// Returns `None` for absent keys and for entries whose age already
    /// exceeds the TTL, even if the sweeper has not reclaimed them yet.
    /// Never mutates the entry: the timestamp is not refreshed, so repeated
    /// reads do not protect an entry from eviction.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let now = Instant::now();
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now, self.ttl) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a key-value pair with a fresh write timestamp.
    ///
    /// Overwrites any existing entry for the key. If the key is new and the
    /// table is at capacity, the entry with the oldest write timestamp is
    /// evicted first, so `len() <= capacity` holds when this returns.
    /// Overwriting never evicts and never changes the entry count.
    pub fn set(&mut self, key: String, value: V) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.evict_oldest() {
                debug!(key = %evicted, "evicted oldest entry to stay within capacity");
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key, Entry::new(value));
    }

    // == Keys ==
    /// Returns a snapshot of all stored keys, in unspecified order.
    ///
    /// The snapshot reflects the table as-is: entries that have expired but
    /// not yet been swept are included.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Evict Oldest ==
    /// Removes the entry with the oldest write timestamp and returns its key.
    ///
    /// When several entries share the oldest timestamp, the lexicographically
    /// smallest key among them is evicted, keeping the policy deterministic
    /// under timestamp collisions. Returns `None` on an empty table.
    ///
    /// This is a linear scan; the caller is expected to hold the table
    /// exclusively for the duration.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let victim = self
            .entries
            .iter()
            .min_by(|(key_a, entry_a), (key_b, entry_b)| {
                entry_a
                    .written_at
                    .cmp(&entry_b.written_at)
                    .then_with(|| key_a.cmp(key_b))
            })
            .map(|(key, _)| key.clone())?;

        self.entries.remove(&victim);
        Some(victim)
    }

    // == Remove Expired ==
    /// Removes every entry older than the TTL as of a single `now` reading.
    ///
    /// Returns the number of entries removed. Called by the background
    /// sweeper once per cycle.
    pub fn remove_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, self.ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        if count > 0 {
            self.stats.record_expirations(count as u64);
        }
        count
    }

    // == Stats ==
    /// Snapshot of the performance counters plus the current entry count.
    pub fn snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    /// Shared handle to the live counters.
    pub fn stats(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
