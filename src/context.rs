//! Shared state handed to every Telegram handler

use crate::apis::CoinGeckoClient;
use crate::config::{ChartsConfig, Config};
use crate::errors::ApiError;
use crate::market::MarketService;
use std::sync::Arc;

pub struct AppContext {
    market: MarketService,
    charts: ChartsConfig,
    coin_symbols: Vec<String>,
}

impl AppContext {
    pub fn new(market: MarketService, charts: ChartsConfig, coin_symbols: Vec<String>) -> Self {
        Self {
            market,
            charts,
            coin_symbols,
        }
    }

    /// Wire the CoinGecko client and cache from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = CoinGeckoClient::from_config(&config.market)?;
        let market = MarketService::new(
            Arc::new(client),
            config.market.coin_ids(),
            config.market.cache_ttl(),
        );
        let symbols = config.market.coins.iter().map(|c| c.symbol.clone()).collect();

        Ok(Self::new(market, config.charts.clone(), symbols))
    }

    pub fn market(&self) -> &MarketService {
        &self.market
    }

    pub fn charts(&self) -> &ChartsConfig {
        &self.charts
    }

    pub fn coin_symbols(&self) -> &[String] {
        &self.coin_symbols
    }
}
