//! Telegram keyboard builders
//!
//! Two inline layouts:
//! - Home menu: Price, Refresh, MC, Gains, Charts, Help
//! - Charts menu: external chart links plus Back

use super::commands::CallbackAction;
use crate::config::ChartsConfig;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Keyboard attached to a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    Home,
    Charts,
}

impl Keyboard {
    pub fn markup(&self, charts: &ChartsConfig) -> InlineKeyboardMarkup {
        match self {
            Keyboard::Home => main_menu(),
            Keyboard::Charts => charts_menu(charts),
        }
    }
}

// === HELPER FUNCTIONS ===

/// Create a callback button for an action
fn btn(text: &str, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text.to_string(), action.callback_data().to_string())
}

/// Create a URL button (returns the Back callback if the URL is invalid)
fn url_btn(text: &str, url: &str) -> InlineKeyboardButton {
    match url.parse() {
        Ok(parsed_url) => InlineKeyboardButton::url(text.to_string(), parsed_url),
        Err(_) => btn(text, CallbackAction::Back),
    }
}

// === MENUS ===

/// Home keyboard shown under every data view
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            btn("💹 Price", CallbackAction::Price),
            btn("🔄 Refresh", CallbackAction::Refresh),
        ],
        vec![
            btn("💰 MC", CallbackAction::MarketCap),
            btn("📈 Gains", CallbackAction::Gains),
        ],
        vec![
            btn("📊 Charts", CallbackAction::Charts),
            btn("ℹ️ Help", CallbackAction::Help),
        ],
    ])
}

/// Chart links and a way back home
pub fn charts_menu(charts: &ChartsConfig) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![url_btn("BTC chart", &charts.btc_chart_url)],
        vec![url_btn("ETH chart", &charts.eth_chart_url)],
        vec![btn("⬅ Back", CallbackAction::Back)],
    ])
}
