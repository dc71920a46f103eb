use pricebot::{
    arguments::{get_config_path, is_help_requested, print_help},
    config::{load_config_from_path, require_bot_token, with_config},
    context::AppContext,
    logger::{self as logger, LogTag},
    telegram,
};
use std::sync::Arc;

/// Main entry point for the price bot
///
/// Startup order: `.env`, logger, config, token check, then polling.
/// Configuration problems are fatal; everything after that is handled per event.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the token may come from the real environment
    dotenv::dotenv().ok();

    logger::init();

    if is_help_requested() {
        print_help();
        return Ok(());
    }

    logger::info(LogTag::System, "🚀 Price bot starting up...");

    let config_path = get_config_path();
    if let Err(e) = load_config_from_path(&config_path) {
        logger::error(LogTag::Config, &format!("Failed to load configuration: {}", e));
        return Err(e.into());
    }

    let (token, context) = with_config(|config| {
        let token = require_bot_token(config)?;
        let context = AppContext::from_config(config)?;
        anyhow::Ok((token, context))
    })
    .map_err(|e| {
        logger::error(LogTag::System, &format!("Startup failed: {}", e));
        e
    })?;

    logger::info(
        LogTag::System,
        &format!(
            "Tracking {} coins ({}), cache TTL {}s",
            context.coin_symbols().len(),
            context.market().coin_ids().join(","),
            context.market().ttl().as_secs()
        ),
    );

    telegram::run_polling(Arc::new(context), &token)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    logger::info(LogTag::System, "Price bot stopped");
    Ok(())
}
