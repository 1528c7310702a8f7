//! Expiration Sweeper Task
//!
//! Background task that periodically removes entries older than the TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background sweeper for a cache store.
///
/// The task sleeps for `interval`, takes the write lock, removes every entry
/// older than the store's TTL, and re-arms, repeating until it is aborted.
/// The sleep is the task's only await point, so cancellation lands between
/// cycles and an in-progress sweep is never cut short.
///
/// # Arguments
/// * `store` - shared reference to the cache store
/// * `interval` - time between sweep cycles
///
/// # Returns
/// A JoinHandle used to abort the task when the cache is closed or dropped.
pub fn spawn_sweeper<V>(store: Arc<RwLock<CacheStore<V>>>, interval: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "expiration sweeper started");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store_guard = store.write().await;
                store_guard.remove_expired()
            };

            if removed > 0 {
                info!(removed, "sweep removed expired entries");
            } else {
                debug!("sweep found no expired entries");
            }
        }
    })
}
