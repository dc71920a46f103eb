//! Slash command handlers

use super::{Command, Reply};
use crate::config::ChartsConfig;
use crate::context::AppContext;
use crate::logger::{self, LogTag};
use crate::telegram::formatters;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};

/// Greeting with the home keyboard
pub fn start_reply() -> Reply {
    Reply::home(formatters::msg_home())
}

pub fn help_reply(ctx: &AppContext) -> Reply {
    Reply::home(formatters::msg_help_command(ctx.coin_symbols()))
}

/// Handle /start and /help
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<AppContext>,
) -> Result<(), String> {
    let user_id = sender_id(&msg);

    let reply = match cmd {
        Command::Start => {
            logger::info(LogTag::Telegram, &format!("User {} started bot", user_id));
            start_reply()
        }
        Command::Help => {
            logger::info(LogTag::Telegram, &format!("User {} requested help", user_id));
            help_reply(&ctx)
        }
    };

    send_reply(&bot, msg.chat.id, &reply, ctx.charts()).await
}

/// Any other slash command gets the help text
pub async fn handle_unknown_command(
    bot: Bot,
    msg: Message,
    ctx: Arc<AppContext>,
) -> Result<(), String> {
    logger::debug(
        LogTag::Telegram,
        &format!(
            "User {} sent unrecognized command: {}",
            sender_id(&msg),
            msg.text().unwrap_or("")
        ),
    );
    send_reply(&bot, msg.chat.id, &help_reply(&ctx), ctx.charts()).await
}

/// Send a reply as a new message with its keyboard
pub async fn send_reply(
    bot: &Bot,
    chat_id: ChatId,
    reply: &Reply,
    charts: &ChartsConfig,
) -> Result<(), String> {
    bot.send_message(chat_id, reply.text.clone())
        .parse_mode(ParseMode::Html)
        .reply_markup(reply.keyboard.markup(charts))
        .await
        .map_err(|e| format!("Failed to send message: {}", e))?;

    Ok(())
}

fn sender_id(msg: &Message) -> u64 {
    msg.from.as_ref().map(|user| user.id.0).unwrap_or(0)
}
