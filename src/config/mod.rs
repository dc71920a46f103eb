//! Configuration system
//!
//! ```text
//! config/
//! ├── mod.rs       # This file - public API
//! ├── macros.rs    # config_struct! macro
//! ├── schemas.rs   # Config sections and defaults
//! └── utils.rs     # Loading and global access
//! ```

pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{ChartsConfig, CoinConfig, Config, MarketConfig, TelegramConfig};
pub use utils::{
    load_config_from_path, parse_config, require_bot_token, with_config, BOT_TOKEN_ENV,
    CONFIG_FILE_PATH,
};
