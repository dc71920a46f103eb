/// Base HTTP client with a request timeout
use crate::errors::ApiError;
use reqwest::Client;
use std::time::Duration;

/// HTTP client wrapper with timeout
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pricebot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Map a transport-level reqwest error onto the API error taxonomy
pub fn classify_request_error(error: &reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else if error.is_decode() {
        ApiError::InvalidResponse(error.to_string())
    } else {
        ApiError::Network(error.to_string())
    }
}

/// Map a non-success HTTP status onto the API error taxonomy
///
/// Returns `None` for 2xx.
pub fn classify_status(status: reqwest::StatusCode) -> Option<ApiError> {
    if status.is_success() {
        None
    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        Some(ApiError::RateLimited)
    } else {
        Some(ApiError::Http(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(StatusCode::OK), None);
        assert_eq!(classify_status(StatusCode::TOO_MANY_REQUESTS), Some(ApiError::RateLimited));
        assert_eq!(classify_status(StatusCode::INTERNAL_SERVER_ERROR), Some(ApiError::Http(500)));
        assert_eq!(classify_status(StatusCode::NOT_FOUND), Some(ApiError::Http(404)));
    }

    #[test]
    fn test_client_keeps_timeout() {
        let client = HttpClient::new(Duration::from_secs(15)).expect("client builds");
        assert_eq!(client.timeout(), Duration::from_secs(15));
    }
}
