//! Upstream API clients
//!
//! ```text
//! apis/
//! ├── client.rs       # reqwest wrapper and error classification
//! └── coingecko/      # /coins/markets client and response types
//! ```

pub mod client;
pub mod coingecko;

pub use client::HttpClient;
pub use coingecko::types::CoinQuote;
pub use coingecko::CoinGeckoClient;
