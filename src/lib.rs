//! Sweepcache - a bounded in-memory key/value cache
//!
//! Provides capacity-bounded storage with oldest-write eviction on insert and
//! TTL expiration reclaimed by a background sweeper task.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStats, StatsSnapshot};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweeper;
