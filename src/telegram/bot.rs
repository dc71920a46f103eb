//! Telegram bot lifecycle
//!
//! Validates the token, registers the command list and runs the long-polling
//! dispatcher until Ctrl-C.

use super::commands::callbacks::handle_callback_query;
use super::commands::menu::{handle_command, handle_unknown_command};
use super::commands::Command;
use crate::context::AppContext;
use crate::logger::{self, LogTag};
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

/// Update routing: known commands, other slash commands, button presses
pub fn schema() -> UpdateHandler<String> {
    let messages = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::filter(is_slash_command).endpoint(handle_unknown_command));

    let callbacks = Update::filter_callback_query().endpoint(handle_callback_query);

    dptree::entry().branch(messages).branch(callbacks)
}

fn is_slash_command(msg: Message) -> bool {
    msg.text().is_some_and(|text| text.starts_with('/'))
}

/// Connect with the given token and process updates until shutdown
pub async fn run_polling(ctx: Arc<AppContext>, token: &str) -> Result<(), String> {
    let bot = Bot::new(token);

    // Validate token by calling getMe
    match bot.get_me().await {
        Ok(me) => {
            logger::info(
                LogTag::Telegram,
                &format!(
                    "Bot initialized: @{} (ID: {})",
                    me.username.as_deref().unwrap_or("unknown"),
                    me.id
                ),
            );
        }
        Err(e) => {
            logger::error(
                LogTag::Telegram,
                &format!("Failed to validate bot token: {}", e),
            );
            return Err(format!("Invalid bot token: {}", e));
        }
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        logger::warning(
            LogTag::Telegram,
            &format!("Failed to register command list: {}", e),
        );
    }

    logger::info(LogTag::Telegram, "Polling for updates");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![ctx])
        .default_handler(|update| async move {
            logger::debug(
                LogTag::Telegram,
                &format!("Ignoring update {}", update.id.0),
            );
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error occurred in the update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    logger::info(LogTag::Telegram, "Polling stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_list() {
        let commands = Command::bot_commands();
        let names: Vec<&str> = commands
            .iter()
            .map(|c| c.command.trim_start_matches('/'))
            .collect();
        assert_eq!(names, vec!["start", "help"]);
    }

    #[test]
    fn test_schema_builds() {
        let _handler = schema();
    }
}
