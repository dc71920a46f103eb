//! Test doubles for the market source

use super::source::MarketSource;
use crate::apis::CoinQuote;
use crate::errors::ApiError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted source that counts upstream calls
///
/// Responses are consumed in order; the last one repeats.
pub struct FakeSource {
    responses: Mutex<Vec<Result<Vec<CoinQuote>, ApiError>>>,
    calls: AtomicUsize,
    last_ids: Mutex<Vec<String>>,
    delay: Duration,
}

impl FakeSource {
    pub fn ok(rows: Vec<CoinQuote>) -> Self {
        Self::sequence(vec![Ok(rows)])
    }

    pub fn failing(error: ApiError) -> Self {
        Self::sequence(vec![Err(error)])
    }

    pub fn sequence(responses: Vec<Result<Vec<CoinQuote>, ApiError>>) -> Self {
        assert!(!responses.is_empty(), "FakeSource needs at least one response");
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
            last_ids: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_ids(&self) -> Vec<String> {
        self.last_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketSource for FakeSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch(&self, ids: &[String]) -> Result<Vec<CoinQuote>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_ids.lock().unwrap() = ids.to_vec();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.remove(0)
        } else {
            responses[0].clone()
        }
    }
}

/// Five coins in upstream (market cap rank) order, with gaps
pub fn sample_quotes() -> Vec<CoinQuote> {
    vec![
        CoinQuote::new("btc", 67123.45, Some(-1.25), Some(1_320_000_000_000.0)),
        CoinQuote::new("eth", 3456.78, Some(5.23), Some(415_000_000_000.0)),
        CoinQuote::new("bnb", 580.1, None, Some(85_000_000_000.0)),
        CoinQuote::new("sol", 145.67, Some(0.0), None),
        CoinQuote::new("ada", 0.4512, Some(-3.1), Some(16_000_000_000.0)),
    ]
}
