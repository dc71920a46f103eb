/// CoinGecko response types
use serde::{Deserialize, Serialize};

/// One row of `/coins/markets`
///
/// Only the fields the bot renders are kept; everything else in the
/// response is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinQuote {
    pub symbol: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

impl CoinQuote {
    pub fn new(
        symbol: &str,
        current_price: f64,
        price_change_percentage_24h: Option<f64>,
        market_cap: Option<f64>,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            current_price: Some(current_price),
            price_change_percentage_24h,
            market_cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markets_response() {
        let body = r#"[
            {
                "id": "bitcoin",
                "symbol": "btc",
                "name": "Bitcoin",
                "current_price": 67123.45,
                "market_cap": 1320000000000,
                "price_change_percentage_24h": -1.2345,
                "total_volume": 30000000000
            },
            {
                "id": "cardano",
                "symbol": "ada",
                "current_price": 0.45,
                "market_cap": null,
                "price_change_percentage_24h": null
            },
            {
                "id": "newcoin",
                "symbol": "new",
                "current_price": null
            }
        ]"#;

        let quotes: Vec<CoinQuote> = serde_json::from_str(body).expect("valid response");
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].symbol, "btc");
        assert_eq!(quotes[0].current_price, Some(67123.45));
        assert_eq!(quotes[0].market_cap, Some(1_320_000_000_000.0));
        assert_eq!(quotes[0].price_change_percentage_24h, Some(-1.2345));
        assert_eq!(quotes[1].market_cap, None);
        assert_eq!(quotes[1].price_change_percentage_24h, None);
        assert_eq!(quotes[2].current_price, None);
        assert_eq!(quotes[2].market_cap, None);
    }

    #[test]
    fn test_missing_symbol_is_rejected() {
        let body = r#"[{"current_price": 1.0}]"#;
        assert!(serde_json::from_str::<Vec<CoinQuote>>(body).is_err());
    }
}
