//! Market data: upstream source plus the TTL-cached fetch path

pub mod service;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use service::{MarketService, MARKETS_CACHE_KEY};
pub use source::MarketSource;
