//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Expiration sweeper: periodically removes entries older than the TTL

mod sweeper;

pub use sweeper::spawn_sweeper;
