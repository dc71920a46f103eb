/// Logger configuration derived from command-line flags
use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Highest level that may be printed
    pub min_level: LogLevel,
    /// Tags with `--debug-<tag>` enabled
    pub debug_tags: HashSet<LogTag>,
    /// Tags with `--verbose-<tag>` enabled
    pub verbose_tags: HashSet<LogTag>,
    /// `--verbose` was given: every tag prints debug and verbose lines
    pub all_tags: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            all_tags: false,
        }
    }
}

impl LoggerConfig {
    /// Build a config from a raw argument list
    pub fn from_args(args: &[String]) -> Self {
        let mut config = Self::default();

        for arg in args {
            if arg == "--verbose" {
                config.min_level = LogLevel::Verbose;
                config.all_tags = true;
            } else if arg == "--quiet" {
                config.min_level = LogLevel::Warning;
            } else if let Some(key) = arg.strip_prefix("--debug-") {
                if let Some(tag) = LogTag::from_debug_key(key) {
                    config.debug_tags.insert(tag);
                }
            } else if let Some(key) = arg.strip_prefix("--verbose-") {
                if let Some(tag) = LogTag::from_debug_key(key) {
                    config.verbose_tags.insert(tag);
                }
            }
        }

        // Per-tag debug output needs the threshold raised past Info
        if config.min_level == LogLevel::Info
            && (!config.debug_tags.is_empty() || !config.verbose_tags.is_empty())
        {
            config.min_level = LogLevel::Verbose;
        }

        config
    }

    pub fn is_debug_enabled_for_tag(&self, tag: &LogTag) -> bool {
        self.all_tags || self.debug_tags.contains(tag) || self.verbose_tags.contains(tag)
    }

    pub fn is_verbose_enabled_for_tag(&self, tag: &LogTag) -> bool {
        self.all_tags || self.verbose_tags.contains(tag)
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> = Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Snapshot of the active logger configuration
pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write().unwrap_or_else(PoisonError::into_inner) = config;
}

/// Configure the logger from the global argument store
pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(&arguments::get_cmd_args()));
}
