//! Structured logging for the price bot
//!
//! A small tagged logging API:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via `--debug-<tag>` flags
//! - Colored console output with local timestamps
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pricebot::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "CoinGecko API timeout");
//! logger::warning(LogTag::Api, "Rate limited by CoinGecko");
//! logger::info(LogTag::Telegram, "User 42 started bot");
//! logger::debug(LogTag::Cache, "Using cached market data"); // Only with --debug-cache
//! ```
//!
//! Third-party crates (teloxide, reqwest) log through the `log` facade; `init`
//! installs an `env_logger` backend for them at warn level unless `RUST_LOG`
//! says otherwise. `--debug-telegram` and `--debug-api` also open up teloxide
//! and reqwest output.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// Call once at startup, before any logging occurs.
pub fn init() {
    config::init_from_args();
    let logger_config = get_logger_config();

    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    for (tag, module) in [(LogTag::Telegram, "teloxide"), (LogTag::Api, "reqwest")] {
        if logger_config.is_debug_enabled_for_tag(&tag) {
            builder.filter_module(module, log::LevelFilter::Debug);
        }
    }
    // A second init (tests, embedding) keeps the first backend
    let _ = builder.try_init();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, only shown when `--debug-<tag>` is given
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, only shown with `--verbose`
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
