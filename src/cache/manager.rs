/// Generic in-memory cache with TTL
///
/// Thread-safe, generic over key/value types.
/// Stale entries stay stored until overwritten but are never returned.
/// Tracks metrics for monitoring.

use super::config::CacheConfig;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Result of a cache lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<V> {
    Hit(V),
    Miss,
}

/// Cache entry with fetch timestamp
struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Cache metrics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub inserts: u64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// One-line summary for debug logs
    pub fn summary(&self) -> String {
        format!(
            "{} hits, {} misses ({} expired), {} inserts, hit rate {:.1}%",
            self.hits,
            self.misses,
            self.expirations,
            self.inserts,
            self.hit_rate() * 100.0
        )
    }
}

/// Generic cache manager
pub struct CacheManager<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    config: CacheConfig,
    data: RwLock<HashMap<K, CacheEntry<V>>>,
    metrics: RwLock<CacheMetrics>,
}

impl<K, V> CacheManager<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    /// Create new cache with given configuration
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            data: RwLock::new(HashMap::new()),
            metrics: RwLock::new(CacheMetrics::default()),
        }
    }

    /// Look up a value using the configured TTL
    pub fn get(&self, key: &K) -> Lookup<V> {
        self.get_with_ttl(key, self.config.ttl)
    }

    /// Look up a value, treating it as absent once `now - fetched_at >= ttl`
    pub fn get_with_ttl(&self, key: &K, ttl: Duration) -> Lookup<V> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        let mut metrics = self.metrics.write().unwrap_or_else(PoisonError::into_inner);

        match data.get(key) {
            Some(entry) if entry.is_fresh(ttl) => {
                metrics.hits += 1;
                Lookup::Hit(entry.value.clone())
            }
            Some(_) => {
                metrics.misses += 1;
                metrics.expirations += 1;
                Lookup::Miss
            }
            None => {
                metrics.misses += 1;
                Lookup::Miss
            }
        }
    }

    /// Store a value, overwriting any existing entry and its timestamp
    pub fn set(&self, key: K, value: V) {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.insert(key, CacheEntry::new(value));

        let mut metrics = self.metrics.write().unwrap_or_else(PoisonError::into_inner);
        metrics.inserts += 1;
    }

    /// Get current metrics
    pub fn metrics(&self) -> CacheMetrics {
        self.metrics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }
}
