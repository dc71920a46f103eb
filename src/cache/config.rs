/// Cache configuration
///
/// The market dataset is re-derived into every view, so one TTL covers them
/// all. The value comes from `market.cache_ttl_secs`.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Time-to-live for cached entries
    pub ttl: Duration,
}

impl CacheConfig {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl }
    }
}
