//! Configuration schema
//!
//! Every field has a default, so the bot runs with no config file at all as
//! long as `BOT_TOKEN` is set.

use crate::config_struct;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// TELEGRAM
// ============================================================================

config_struct! {
    /// Telegram bot connection settings
    pub struct TelegramConfig {
        /// Bot token from @BotFather. `BOT_TOKEN` in the environment wins.
        bot_token: String = String::new(),
    }
}

// ============================================================================
// MARKET DATA
// ============================================================================

/// A coin shown in the tables: CoinGecko id plus display symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinConfig {
    pub id: String,
    pub symbol: String,
}

impl CoinConfig {
    pub fn new(id: &str, symbol: &str) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
        }
    }
}

pub fn default_coins() -> Vec<CoinConfig> {
    vec![
        CoinConfig::new("bitcoin", "BTC"),
        CoinConfig::new("ethereum", "ETH"),
        CoinConfig::new("binancecoin", "BNB"),
        CoinConfig::new("solana", "SOL"),
        CoinConfig::new("cardano", "ADA"),
    ]
}

config_struct! {
    /// Upstream market data settings
    pub struct MarketConfig {
        /// CoinGecko API base URL
        base_url: String = "https://api.coingecko.com/api/v3".to_string(),
        /// Coins requested from the markets endpoint, in display order
        coins: Vec<CoinConfig> = default_coins(),
        /// Seconds a fetched dataset is served from memory
        cache_ttl_secs: u64 = 60,
        /// Upstream request timeout in seconds
        request_timeout_secs: u64 = 15,
    }
}

impl MarketConfig {
    pub fn coin_ids(&self) -> Vec<String> {
        self.coins.iter().map(|c| c.id.clone()).collect()
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// ============================================================================
// CHART LINKS
// ============================================================================

config_struct! {
    /// External chart links offered by the charts keyboard
    pub struct ChartsConfig {
        btc_chart_url: String = "https://www.tradingview.com/symbols/BTCUSD/".to_string(),
        eth_chart_url: String = "https://www.tradingview.com/symbols/ETHUSD/".to_string(),
    }
}

// ============================================================================
// ROOT
// ============================================================================

config_struct! {
    /// Root configuration (`data/config.toml`)
    pub struct Config {
        telegram: TelegramConfig = TelegramConfig::default(),
        market: MarketConfig = MarketConfig::default(),
        charts: ChartsConfig = ChartsConfig::default(),
    }
}
