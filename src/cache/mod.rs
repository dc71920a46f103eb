//! In-memory TTL cache
//!
//! Holds the last upstream dataset so that every view rendered inside the
//! TTL window is derived from one request.

pub mod config;
pub mod manager;

pub use config::CacheConfig;
pub use manager::{CacheManager, CacheMetrics, Lookup};
