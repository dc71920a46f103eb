//! Configuration utilities - loading and access helpers
//!
//! - Loading configuration from disk (missing file = defaults)
//! - Applying environment overrides (`BOT_TOKEN`)
//! - Thread-safe access helpers

use super::schemas::Config;
use crate::errors::ConfigError;
use crate::logger::{self, LogTag};
use once_cell::sync::OnceCell;
use std::sync::{PoisonError, RwLock};

/// Global configuration instance
///
/// Access it using `with_config`.
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Environment variable holding the bot token
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Load configuration from a file path and initialize the global CONFIG
///
/// If the file doesn't exist, default values are used. `BOT_TOKEN` from the
/// environment overrides `telegram.bot_token`.
pub fn load_config_from_path(path: &str) -> Result<(), ConfigError> {
    let mut config = if std::path::Path::new(path).exists() {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        logger::debug(LogTag::Config, &format!("Loaded config file '{}'", path));
        parse_config(path, &contents)?
    } else {
        logger::debug(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        Config::default()
    };

    if let Ok(token) = std::env::var(BOT_TOKEN_ENV) {
        if !token.trim().is_empty() {
            config.telegram.bot_token = token.trim().to_string();
        }
    }

    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| ConfigError::AlreadyInitialized)?;

    Ok(())
}

/// Parse TOML contents into a Config
pub fn parse_config(path: &str, contents: &str) -> Result<Config, ConfigError> {
    toml::from_str::<Config>(contents).map_err(|e| ConfigError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Read access to the global configuration
///
/// Falls back to defaults when nothing was loaded (tests, library use).
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    let lock = CONFIG.get_or_init(|| RwLock::new(Config::default()));
    let config = lock.read().unwrap_or_else(PoisonError::into_inner);
    f(&config)
}

/// The bot token, or a fatal configuration error when it is unset
pub fn require_bot_token(config: &Config) -> Result<String, ConfigError> {
    let token = config.telegram.bot_token.trim();
    if token.is_empty() {
        return Err(ConfigError::MissingBotToken);
    }
    Ok(token.to_string())
}
