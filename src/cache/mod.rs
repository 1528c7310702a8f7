//! Cache Module
//!
//! In-memory storage table with oldest-write eviction and TTL expiration.

mod entry;
mod handle;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::Entry;
pub use handle::Cache;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::CacheStore;
