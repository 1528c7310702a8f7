//! Cache Handle Module
//!
//! The public front door: owns the storage table behind a reader/writer lock
//! and the background sweeper's lifetime.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::{CacheStore, StatsSnapshot};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::tasks::spawn_sweeper;

// == Cache ==
/// Bounded in-memory key/value cache with TTL expiration.
///
/// `get` and `keys` take the shared side of the lock, so readers run
/// concurrently; `set` and the sweeper's expiration pass take the exclusive
/// side. Values are returned by clone, hence the `Clone` bound on `V`.
///
/// Construction spawns one background sweeper task; [`Cache::close`] stops
/// it. Dropping the handle also aborts the sweeper so a forgotten cache does
/// not keep the task and its table alive.
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
    sweeper: JoinHandle<()>,
}

impl<V> Cache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a cache with the given capacity and TTL, sweeping once per
    /// TTL interval.
    ///
    /// # Errors
    /// Rejects a zero capacity or zero TTL before any state is allocated or
    /// any task is spawned.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime, since it spawns the
    /// sweeper task.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Self::with_config(CacheConfig::new(capacity, ttl))
    }

    /// Creates a cache from an explicit [`CacheConfig`], allowing a sweep
    /// interval finer than the TTL.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        let store = Arc::new(RwLock::new(CacheStore::new(config.capacity, config.ttl)));
        let sweeper = spawn_sweeper(Arc::clone(&store), config.sweep_interval);

        Ok(Self { store, sweeper })
    }

    // == Get ==
    /// Looks up a value by key.
    ///
    /// Returns `None` when the key is absent, was evicted, or has expired.
    /// Does not refresh the entry's timestamp.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.read().await.get(key)
    }

    // == Set ==
    /// Stores a key-value pair, evicting the oldest-written entry first if
    /// the table is full and the key is new.
    ///
    /// The eviction check and the insert run under one exclusive lock
    /// acquisition, so no other operation observes the table in between.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        self.store.write().await.set(key.into(), value);
    }

    // == Keys ==
    /// Point-in-time snapshot of all stored keys, in unspecified order.
    pub async fn keys(&self) -> Vec<String> {
        self.store.read().await.keys()
    }

    /// Current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stats ==
    /// Snapshot of the performance counters.
    pub async fn stats(&self) -> StatsSnapshot {
        self.store.read().await.snapshot()
    }

    // == Close ==
    /// Stops the background sweeper and returns immediately without waiting
    /// for the task to exit.
    ///
    /// The cache remains usable afterward, but expired entries are no longer
    /// reclaimed; callers relying on TTL cleanup should not keep writing
    /// after closing.
    pub fn close(&self) {
        self.sweeper.abort();
    }
}

impl<V> Drop for Cache<V> {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}
