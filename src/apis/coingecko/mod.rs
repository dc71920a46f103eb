//! CoinGecko API client
//!
//! API Documentation: https://docs.coingecko.com/reference/introduction
//!
//! Endpoints implemented:
//! 1. /api/v3/coins/markets - Price, market cap and 24h change for a set of coins

pub mod types;

use self::types::CoinQuote;
use crate::apis::client::{classify_request_error, classify_status, HttpClient};
use crate::config::MarketConfig;
use crate::errors::ApiError;
use crate::logger::{self, LogTag};
use std::time::{Duration, Instant};

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// Quote currency for every request
pub const VS_CURRENCY: &str = "usd";

const MARKETS_PATH: &str = "/coins/markets";

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct CoinGeckoClient {
    http_client: HttpClient,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &MarketConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.request_timeout())
    }

    pub fn markets_url(&self) -> String {
        format!("{}{}", self.base_url, MARKETS_PATH)
    }

    /// Fetch current price, market cap and 24h change for `ids`
    ///
    /// One request, no retries. Rows come back in CoinGecko's order
    /// (market cap rank).
    pub async fn fetch_markets(&self, ids: &[String]) -> Result<Vec<CoinQuote>, ApiError> {
        let start = Instant::now();
        let url = self.markets_url();
        let joined_ids = ids.join(",");

        logger::debug(
            LogTag::Api,
            &format!("GET {} ids={} (timeout {:?})", url, joined_ids, self.http_client.timeout()),
        );

        let response = self
            .http_client
            .client()
            .get(&url)
            .header("Accept", "application/json")
            .query(&[
                ("vs_currency", VS_CURRENCY),
                ("ids", joined_ids.as_str()),
                ("price_change_percentage", "24h"),
            ])
            .send()
            .await
            .map_err(|e| classify_request_error(&e))?;

        if let Some(error) = classify_status(response.status()) {
            logger::debug(
                LogTag::Api,
                &format!("CoinGecko returned HTTP {}", response.status()),
            );
            return Err(error);
        }

        let quotes: Vec<CoinQuote> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::InvalidResponse(e.to_string())
            }
        })?;

        logger::debug(
            LogTag::Api,
            &format!(
                "CoinGecko returned {} rows in {}ms",
                quotes.len(),
                start.elapsed().as_millis()
            ),
        );

        for quote in &quotes {
            logger::verbose(LogTag::Api, &format!("Row: {:?}", quote));
        }

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn test_markets_url() {
        let client = CoinGeckoClient::new("https://api.coingecko.com/api/v3/", Duration::from_secs(15))
            .expect("client builds");
        assert_eq!(client.markets_url(), "https://api.coingecko.com/api/v3/coins/markets");
    }

    #[test]
    fn test_from_config() {
        let config = MarketConfig::default();
        let client = CoinGeckoClient::from_config(&config).expect("client builds");
        assert_eq!(client.http_client.timeout(), Duration::from_secs(15));
    }

    /// Serve one canned HTTP response on a local port
    ///
    /// Returns the base URL and a channel carrying the request line.
    fn serve_once(response: String, hold: Duration) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
        let base_url = format!("http://{}", listener.local_addr().expect("stub addr"));
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let read = stream.read(&mut buf).unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..read]);
                let _ = tx.send(request.lines().next().unwrap_or("").to_string());

                // Keep the socket open without answering
                thread::sleep(hold);
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        (base_url, rx)
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    async fn fetch_from(base_url: &str, timeout: Duration) -> Result<Vec<CoinQuote>, ApiError> {
        let client = CoinGeckoClient::new(base_url, timeout).expect("client builds");
        client
            .fetch_markets(&["bitcoin".to_string(), "ethereum".to_string()])
            .await
    }

    #[tokio::test]
    async fn test_success_decodes_rows_and_sends_query() {
        let body = r#"[{"symbol":"btc","current_price":67000.5,"price_change_percentage_24h":-1.2,"market_cap":1.3e12},
                       {"symbol":"eth","current_price":3400.0,"price_change_percentage_24h":null,"market_cap":null}]"#;
        let (base_url, request) = serve_once(http_response("200 OK", body), Duration::ZERO);

        let quotes = fetch_from(&base_url, Duration::from_secs(5)).await.expect("rows");
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol, "btc");
        assert_eq!(quotes[1].market_cap, None);

        let line = request.recv().expect("request line");
        assert!(line.starts_with("GET /coins/markets?"));
        assert!(line.contains("vs_currency=usd"));
        assert!(line.contains("ids=bitcoin%2Cethereum"));
        assert!(line.contains("price_change_percentage=24h"));
    }

    #[tokio::test]
    async fn test_slow_server_is_timeout() {
        let (base_url, _request) = serve_once(
            http_response("200 OK", "[]"),
            Duration::from_secs(2),
        );

        let err = fetch_from(&base_url, Duration::from_millis(300)).await.unwrap_err();
        assert_eq!(err, ApiError::Timeout);
        assert_eq!(err.user_message(), "API timeout - try again in a moment");
    }

    #[tokio::test]
    async fn test_429_is_rate_limited() {
        let (base_url, _request) =
            serve_once(http_response("429 Too Many Requests", ""), Duration::ZERO);

        let err = fetch_from(&base_url, Duration::from_secs(5)).await.unwrap_err();
        assert_eq!(err, ApiError::RateLimited);
    }

    #[tokio::test]
    async fn test_server_error_keeps_status() {
        let (base_url, _request) =
            serve_once(http_response("500 Internal Server Error", ""), Duration::ZERO);

        let err = fetch_from(&base_url, Duration::from_secs(5)).await.unwrap_err();
        assert_eq!(err, ApiError::Http(500));
    }

    #[tokio::test]
    async fn test_non_array_body_is_invalid_response() {
        let (base_url, _request) = serve_once(http_response("200 OK", "{}"), Duration::ZERO);

        let err = fetch_from(&base_url, Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)), "got {:?}", err);
        assert_eq!(err.user_message(), "API error");
    }

    #[tokio::test]
    async fn test_refused_connection_is_network_error() {
        // Bind then drop to get a local port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let base_url = format!("http://{}", listener.local_addr().expect("addr"));
        drop(listener);

        let err = fetch_from(&base_url, Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    }
}
