//! Error types for the price bot
//!
//! `ApiError` covers the upstream fetch path and knows the short notice shown
//! to chat users. `ConfigError` covers startup and is always fatal.

use thiserror::Error;

// =============================================================================
// UPSTREAM API ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("rate limited by upstream (HTTP 429)")]
    RateLimited,

    #[error("HTTP {0}")]
    Http(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Short notice shown to the user in place of the requested view
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Timeout => "API timeout - try again in a moment",
            ApiError::RateLimited => "Rate limited - wait a minute",
            ApiError::Http(_) | ApiError::Network(_) | ApiError::InvalidResponse(_) => "API error",
        }
    }
}

// =============================================================================
// CONFIGURATION ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN environment variable not set")]
    MissingBotToken,

    #[error("failed to read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("config already initialized")]
    AlreadyInitialized,
}
