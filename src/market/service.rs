//! Fetch-and-cache path for the market dataset
//!
//! Every view reads the same dataset. A fresh cache entry is returned as is;
//! otherwise one upstream request is made and, on success only, cached.

use super::source::MarketSource;
use crate::apis::CoinQuote;
use crate::cache::{CacheConfig, CacheManager, CacheMetrics, Lookup};
use crate::errors::ApiError;
use crate::logger::{self, LogTag};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Cache key for the full markets dataset
pub const MARKETS_CACHE_KEY: &str = "markets";

pub struct MarketService {
    source: Arc<dyn MarketSource>,
    cache: CacheManager<String, Vec<CoinQuote>>,
    coin_ids: Vec<String>,
    /// Serializes refreshes so concurrent misses share one upstream call
    refresh_lock: Mutex<()>,
}

impl MarketService {
    pub fn new(source: Arc<dyn MarketSource>, coin_ids: Vec<String>, ttl: Duration) -> Self {
        Self {
            source,
            cache: CacheManager::new(CacheConfig::with_ttl(ttl)),
            coin_ids,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn coin_ids(&self) -> &[String] {
        &self.coin_ids
    }

    pub fn ttl(&self) -> Duration {
        self.cache.ttl()
    }

    pub fn cache_metrics(&self) -> CacheMetrics {
        self.cache.metrics()
    }

    /// Current market rows, from cache when fresh
    pub async fn get_markets(&self) -> Result<Vec<CoinQuote>, ApiError> {
        if let Lookup::Hit(rows) = self.lookup() {
            logger::debug(LogTag::Cache, "Using cached market data");
            return Ok(rows);
        }

        let _guard = self.refresh_lock.lock().await;

        // Another event may have refreshed while we waited
        if let Lookup::Hit(rows) = self.lookup() {
            logger::debug(LogTag::Cache, "Using market data refreshed by a concurrent request");
            return Ok(rows);
        }

        let rows = self.source.fetch(&self.coin_ids).await.map_err(|e| {
            self.log_fetch_error(&e);
            e
        })?;

        logger::info(
            LogTag::Api,
            &format!("Fetched {} coins from {}", rows.len(), self.source.name()),
        );

        self.cache.set(MARKETS_CACHE_KEY.to_string(), rows.clone());
        logger::debug(
            LogTag::Cache,
            &format!(
                "Market cache refreshed ({} entries): {}",
                self.cache.len(),
                self.cache.metrics().summary()
            ),
        );
        Ok(rows)
    }

    fn lookup(&self) -> Lookup<Vec<CoinQuote>> {
        self.cache.get(&MARKETS_CACHE_KEY.to_string())
    }

    fn log_fetch_error(&self, error: &ApiError) {
        let source = self.source.name();
        match error {
            ApiError::Timeout => logger::error(LogTag::Api, &format!("{} API timeout", source)),
            ApiError::RateLimited => {
                logger::warning(LogTag::Api, &format!("Rate limited by {}", source))
            }
            ApiError::Http(status) => {
                logger::error(LogTag::Api, &format!("{} HTTP error: {}", source, status))
            }
            other => logger::error(LogTag::Api, &format!("{} request failed: {}", source, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::testing::{sample_quotes, FakeSource};

    fn service(source: Arc<FakeSource>, ttl: Duration) -> MarketService {
        MarketService::new(source, vec!["bitcoin".to_string(), "ethereum".to_string()], ttl)
    }

    #[tokio::test]
    async fn test_second_request_within_ttl_is_cached() {
        let source = Arc::new(FakeSource::ok(sample_quotes()));
        let market = service(source.clone(), Duration::from_secs(60));

        let first = market.get_markets().await.expect("first fetch");
        let second = market.get_markets().await.expect("cached");

        assert_eq!(first, second);
        assert_eq!(source.calls(), 1);
        assert_eq!(market.cache_metrics().hits, 1);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_exactly_one_fetch() {
        let source = Arc::new(FakeSource::ok(sample_quotes()));
        let market = service(source.clone(), Duration::from_millis(50));

        market.get_markets().await.expect("first fetch");
        tokio::time::sleep(Duration::from_millis(80)).await;

        market.get_markets().await.expect("refetch");
        market.get_markets().await.expect("cached again");

        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_metrics_track_refresh_and_hits() {
        let source = Arc::new(FakeSource::ok(sample_quotes()));
        let market = service(source.clone(), Duration::from_secs(60));

        market.get_markets().await.expect("first fetch");
        let metrics = market.cache_metrics();
        // Miss before the refresh lock and again after it
        assert_eq!(metrics.misses, 2);
        assert_eq!(metrics.inserts, 1);
        assert_eq!(metrics.hits, 0);

        market.get_markets().await.expect("cached");
        let metrics = market.cache_metrics();
        assert_eq!(metrics.hits, 1);
        assert!((metrics.hit_rate() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let source = Arc::new(FakeSource::sequence(vec![
            Err(ApiError::Timeout),
            Ok(sample_quotes()),
        ]));
        let market = service(source.clone(), Duration::from_secs(60));

        assert_eq!(market.get_markets().await, Err(ApiError::Timeout));
        assert_eq!(market.get_markets().await, Ok(sample_quotes()));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_forwarded() {
        let source = Arc::new(FakeSource::ok(sample_quotes()));
        let market = service(source.clone(), Duration::from_secs(60));

        market.get_markets().await.expect("fetch");
        assert_eq!(
            source.last_ids(),
            vec!["bitcoin".to_string(), "ethereum".to_string()]
        );
    }

    #[tokio::test]
    async fn test_concurrent_misses_share_one_fetch() {
        let source = Arc::new(FakeSource::ok(sample_quotes()).with_delay(Duration::from_millis(50)));
        let market = service(source.clone(), Duration::from_secs(60));

        let (a, b) = tokio::join!(market.get_markets(), market.get_markets());

        assert!(a.is_ok() && b.is_ok());
        assert_eq!(source.calls(), 1);
    }
}
