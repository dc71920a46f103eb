//! Callback query handlers for inline keyboard buttons
//!
//! Each press edits the message it came from. The callback is answered after
//! the edit so a failed edit can still surface as an alert (see [`ack_for`]).

use super::{CallbackAction, Reply};
use crate::context::AppContext;
use crate::errors::ApiError;
use crate::logger::{self, LogTag};
use crate::telegram::formatters;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId, ParseMode};
use teloxide::RequestError;

/// How a button press is acknowledged once the edit has been attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ack {
    /// Plain answer that only clears the button spinner
    Plain,
    /// Popup carrying the reply text, shown when the message could not be edited
    Alert(String),
}

/// Handle callback query from inline keyboard button
///
/// The query is answered only after the reply is rendered and the edit is
/// attempted, so an upstream timeout keeps the button spinner up for as long
/// as `market.request_timeout_secs` (15s by default). Answering first would
/// lose the alert fallback for failed edits.
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    ctx: Arc<AppContext>,
) -> Result<(), String> {
    let user_id = query.from.id.0;
    let data = query.data.as_deref().unwrap_or("");
    logger::info(LogTag::Telegram, &format!("User {} clicked: {}", user_id, data));

    let action = CallbackAction::parse(data);
    let reply = build_callback_reply(&ctx, user_id, &action).await;

    let ack = match query.message.as_ref() {
        Some(message) => {
            let edit = edit_reply(&bot, message.chat().id, message.id(), &reply, &ctx).await;
            if let Err(e) = &edit {
                logger::warning(
                    LogTag::Telegram,
                    &format!("Edit failed for user {}: {}", user_id, e),
                );
            }
            ack_for(&edit, &reply.text)
        }
        // Inline-mode results carry no message to edit
        None => {
            logger::debug(LogTag::Telegram, "Callback without message context");
            Ack::Alert(formatters::alert_text(&reply.text))
        }
    };

    answer(&bot, &query.id, ack).await
}

/// Pick the acknowledgement for an edit result
///
/// "Message is not modified" means the chat already shows this reply, so it
/// counts as success.
pub fn ack_for(edit: &Result<(), RequestError>, reply_html: &str) -> Ack {
    match edit {
        Ok(()) | Err(RequestError::Api(teloxide::ApiError::MessageNotModified)) => Ack::Plain,
        Err(_) => Ack::Alert(formatters::alert_text(reply_html)),
    }
}

/// Render the reply for a button press, folding upstream failures into a notice
pub async fn build_callback_reply(
    ctx: &AppContext,
    user_id: u64,
    action: &CallbackAction,
) -> Reply {
    match render_action(ctx, action).await {
        Ok(reply) => reply,
        Err(e) => {
            logger::error(LogTag::Telegram, &format!("Error for user {}: {}", user_id, e));
            Reply::home(formatters::msg_error(e.user_message()))
        }
    }
}

async fn render_action(ctx: &AppContext, action: &CallbackAction) -> Result<Reply, ApiError> {
    let reply = match action {
        CallbackAction::Price | CallbackAction::Refresh => {
            let rows = ctx.market().get_markets().await?;
            Reply::home(formatters::msg_prices(&rows))
        }
        CallbackAction::MarketCap => {
            let rows = ctx.market().get_markets().await?;
            Reply::home(formatters::msg_market_caps(&rows))
        }
        CallbackAction::Gains => {
            let rows = ctx.market().get_markets().await?;
            Reply::home(formatters::msg_gains(&rows))
        }
        CallbackAction::Charts => Reply::charts(formatters::msg_charts()),
        CallbackAction::Help => Reply::home(formatters::msg_help_button()),
        CallbackAction::Back => Reply::home(formatters::msg_back()),
        CallbackAction::Unknown(data) => {
            logger::debug(LogTag::Telegram, &format!("Unknown callback: {}", data));
            Reply::home(formatters::msg_unknown(data))
        }
    };
    Ok(reply)
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Edit the originating message in place
async fn edit_reply(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    reply: &Reply,
    ctx: &AppContext,
) -> Result<(), RequestError> {
    bot.edit_message_text(chat_id, message_id, reply.text.clone())
        .parse_mode(ParseMode::Html)
        .reply_markup(reply.keyboard.markup(ctx.charts()))
        .await?;
    Ok(())
}

async fn answer(bot: &Bot, query_id: &str, ack: Ack) -> Result<(), String> {
    let request = bot.answer_callback_query(query_id);
    let request = match ack {
        Ack::Plain => request,
        Ack::Alert(text) => request.text(text).show_alert(true),
    };
    request
        .await
        .map_err(|e| format!("Failed to answer callback: {}", e))?;
    Ok(())
}
