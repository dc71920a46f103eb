//! Upstream market data source abstraction

use crate::apis::{CoinGeckoClient, CoinQuote};
use crate::errors::ApiError;
use async_trait::async_trait;

/// Anything that can produce the market dataset for a set of coin ids
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// One upstream request for all `ids`
    async fn fetch(&self, ids: &[String]) -> Result<Vec<CoinQuote>, ApiError>;
}

#[async_trait]
impl MarketSource for CoinGeckoClient {
    fn name(&self) -> &'static str {
        "CoinGecko"
    }

    async fn fetch(&self, ids: &[String]) -> Result<Vec<CoinQuote>, ApiError> {
        self.fetch_markets(ids).await
    }
}
