//! Telegram front end for the price bot
//!
//! # Architecture
//!
//! ```text
//! telegram/
//! ├── mod.rs           # This file - public API
//! ├── bot.rs           # Token check, command registration, dispatcher
//! ├── keyboards.rs     # Inline keyboards
//! ├── formatters.rs    # HTML message formatters
//! │
//! └── commands/        # Command handlers
//!     ├── mod.rs       # Command and callback enums
//!     ├── menu.rs      # /start, /help and other slash commands
//!     └── callbacks.rs # Button click handlers
//! ```

// ============================================================================
// SUBMODULES
// ============================================================================

pub mod bot;
pub mod commands;
pub mod formatters;
pub mod keyboards;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use bot::{run_polling, schema};
pub use commands::{CallbackAction, Command, Reply};
pub use keyboards::Keyboard;
