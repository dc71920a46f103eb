//! Command and callback routing
//!
//! Inbound identifiers are parsed into closed enums before anything is
//! rendered, so every button press maps to exactly one view.

pub mod callbacks;
pub mod menu;

use super::keyboards::Keyboard;
use teloxide::utils::command::BotCommands;

/// Slash commands registered with Telegram
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show the price menu")]
    Start,
    #[command(description = "explain the buttons")]
    Help,
}

/// Button identifiers carried in callback data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    Price,
    /// Same view as Price; the cache is still honoured
    Refresh,
    MarketCap,
    Gains,
    Charts,
    Help,
    Back,
    Unknown(String),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Self {
        match data.trim() {
            "price" => CallbackAction::Price,
            "refresh" => CallbackAction::Refresh,
            "mc" => CallbackAction::MarketCap,
            "gains" => CallbackAction::Gains,
            "charts" => CallbackAction::Charts,
            "helpbtn" => CallbackAction::Help,
            "back" => CallbackAction::Back,
            other => CallbackAction::Unknown(other.to_string()),
        }
    }

    pub fn callback_data(&self) -> &str {
        match self {
            CallbackAction::Price => "price",
            CallbackAction::Refresh => "refresh",
            CallbackAction::MarketCap => "mc",
            CallbackAction::Gains => "gains",
            CallbackAction::Charts => "charts",
            CallbackAction::Help => "helpbtn",
            CallbackAction::Back => "back",
            CallbackAction::Unknown(data) => data,
        }
    }
}

/// Text plus keyboard, ready for the transport to send or edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Reply {
    pub fn home(text: String) -> Self {
        Self {
            text,
            keyboard: Keyboard::Home,
        }
    }

    pub fn charts(text: String) -> Self {
        Self {
            text,
            keyboard: Keyboard::Charts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_actions() {
        let cases = [
            ("price", CallbackAction::Price),
            ("refresh", CallbackAction::Refresh),
            ("mc", CallbackAction::MarketCap),
            ("gains", CallbackAction::Gains),
            ("charts", CallbackAction::Charts),
            ("helpbtn", CallbackAction::Help),
            ("back", CallbackAction::Back),
        ];
        for (data, expected) in cases {
            let action = CallbackAction::parse(data);
            assert_eq!(action, expected);
            assert_eq!(action.callback_data(), data);
        }
    }

    #[test]
    fn test_parse_trims_and_falls_back() {
        assert_eq!(CallbackAction::parse("  gains \n"), CallbackAction::Gains);
        assert_eq!(CallbackAction::parse("xyz"), CallbackAction::Unknown("xyz".to_string()));
        assert_eq!(CallbackAction::parse(""), CallbackAction::Unknown(String::new()));
        // Identifiers are case-sensitive
        assert_eq!(CallbackAction::parse("Price"), CallbackAction::Unknown("Price".to_string()));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "pricebot").ok(), Some(Command::Start));
        assert_eq!(Command::parse("/help", "pricebot").ok(), Some(Command::Help));
        assert_eq!(Command::parse("/start@pricebot", "pricebot").ok(), Some(Command::Start));
        assert!(Command::parse("/prices", "pricebot").is_err());
    }
}
