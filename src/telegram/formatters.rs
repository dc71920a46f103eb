//! Telegram HTML message formatters
//!
//! Pure functions from market rows to message text. Table rows are wrapped in
//! `<code>` so columns line up in the monospace font.

use crate::apis::CoinQuote;
use num_format::{Locale, ToFormattedString};

/// Shown for any value the upstream left out
pub const PLACEHOLDER: &str = "—";

pub const UP_GLYPH: &str = "🔺";
pub const DOWN_GLYPH: &str = "🔻";
pub const WARNING_GLYPH: &str = "⚠️";

/// Symbols are padded or cut to this many characters
pub const SYMBOL_WIDTH: usize = 4;

const PRICE_WIDTH: usize = 10;
const COLUMN_WIDTH: usize = 8;

/// Telegram caps callback alerts at 200 characters
const ALERT_MAX_CHARS: usize = 200;

const TABLE_HEADER: &str = "COIN   PRICE        24h     MCAP";

// ============================================================================
// VALUE FORMATTING
// ============================================================================

/// Escape text for Telegram's HTML parse mode
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Two decimals with thousands separators: `1234567.891` → `1,234,567.89`
pub fn format_grouped(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}.{:02}",
        sign,
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

/// Abbreviated dollar amount, largest suffix first (B, M, K)
pub fn format_money(value: Option<f64>) -> String {
    match value {
        None => PLACEHOLDER.to_string(),
        Some(n) if n >= 1_000_000_000.0 => format!("${:.2}B", n / 1_000_000_000.0),
        Some(n) if n >= 1_000_000.0 => format!("${:.2}M", n / 1_000_000.0),
        Some(n) if n >= 1_000.0 => format!("${:.2}K", n / 1_000.0),
        Some(n) => format!("${}", format_grouped(n)),
    }
}

/// Direction glyph plus absolute percent; zero counts as up
pub fn format_change(percent: Option<f64>) -> String {
    match percent {
        None => PLACEHOLDER.to_string(),
        Some(p) => {
            let glyph = if p >= 0.0 { UP_GLYPH } else { DOWN_GLYPH };
            format!("{}{:.2}%", glyph, p.abs())
        }
    }
}

/// `$` followed by the grouped price right-aligned in the price column
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:>width$}", format_grouped(p), width = PRICE_WIDTH),
        None => format!("{:>width$}", PLACEHOLDER, width = PRICE_WIDTH + 1),
    }
}

/// Upper-cased symbol, padded or truncated to `SYMBOL_WIDTH`
pub fn format_symbol(symbol: &str) -> String {
    let short: String = symbol.to_uppercase().chars().take(SYMBOL_WIDTH).collect();
    format!("{:<width$}", short, width = SYMBOL_WIDTH)
}

/// Strip tags and entities so an HTML message can be shown as a plain alert
pub fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Plain, length-capped text for `answerCallbackQuery` alerts
pub fn alert_text(html: &str) -> String {
    plain_text(html).chars().take(ALERT_MAX_CHARS).collect()
}

fn code_line(line: &str) -> String {
    format!("<code>{}</code>", html_escape(line))
}

// ============================================================================
// ORDERING
// ============================================================================

/// Descending by market cap, missing caps count as zero
pub fn sort_by_market_cap(rows: &[CoinQuote]) -> Vec<CoinQuote> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        b.market_cap
            .unwrap_or(0.0)
            .total_cmp(&a.market_cap.unwrap_or(0.0))
    });
    sorted
}

/// Descending by 24h change, missing changes last
pub fn sort_by_gains(rows: &[CoinQuote]) -> Vec<CoinQuote> {
    let key = |c: &CoinQuote| c.price_change_percentage_24h.unwrap_or(f64::NEG_INFINITY);
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));
    sorted
}

// ============================================================================
// VIEWS
// ============================================================================

/// Monospace price table: symbol, price, 24h change, market cap
pub fn format_price_table(rows: &[CoinQuote]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(code_line(TABLE_HEADER));
    for coin in rows {
        lines.push(code_line(&format!(
            "{} {}  {:>w$}  {:>w$}",
            format_symbol(&coin.symbol),
            format_price(coin.current_price),
            format_change(coin.price_change_percentage_24h),
            format_money(coin.market_cap),
            w = COLUMN_WIDTH
        )));
    }
    lines.join("\n")
}

pub fn msg_prices(rows: &[CoinQuote]) -> String {
    format!("💰 <b>Live Prices (USD)</b>\n\n{}", format_price_table(rows))
}

pub fn msg_market_caps(rows: &[CoinQuote]) -> String {
    let lines: Vec<String> = sort_by_market_cap(rows)
        .iter()
        .map(|c| code_line(&format!("{}   {}", format_symbol(&c.symbol), format_money(c.market_cap))))
        .collect();
    format!("🦁 <b>Market Caps</b>\n\n{}", lines.join("\n"))
}

pub fn msg_gains(rows: &[CoinQuote]) -> String {
    let lines: Vec<String> = sort_by_gains(rows)
        .iter()
        .map(|c| {
            code_line(&format!(
                "{}   {}",
                format_symbol(&c.symbol),
                format_change(c.price_change_percentage_24h)
            ))
        })
        .collect();
    format!("📈 <b>24h Top Movers</b>\n\n{}", lines.join("\n"))
}

pub fn msg_home() -> String {
    "🤖 <b>Crypto Price Bot</b>\n\nLive prices from CoinGecko".to_string()
}

pub fn msg_back() -> String {
    "🤖 Crypto Price Bot:".to_string()
}

pub fn msg_charts() -> String {
    "📊 Choose a chart:".to_string()
}

/// Reply to `/help`, listing the configured coins
pub fn msg_help_command(symbols: &[String]) -> String {
    format!(
        "🤖 <b>Crypto Price Bot</b>\n\n\
         Get live crypto data from CoinGecko.\n\n\
         <b>Buttons:</b>\n\
         - 💹 <b>Price</b>: Live prices for {}\n\
         - 🔄 <b>Refresh</b>: Re-fetch prices now\n\
         - 💰 <b>MC</b>: Market caps\n\
         - 📈 <b>Gains</b>: 24h top movers\n\
         - 📊 <b>Charts</b>: Open TradingView links\n\
         - ℹ️ <b>Help</b>: Show this message\n\n\
         Type /start to show buttons again.",
        html_escape(&symbols.join("/"))
    )
}

/// Reply to the Help button
pub fn msg_help_button() -> String {
    "🤖 <b>Crypto Price Bot</b>\n\n\
     Live crypto prices from CoinGecko.\n\n\
     <b>Features:</b>\n\
     - 💹 Price: Current prices\n\
     - 💰 MC: Market capitalizations\n\
     - 📈 Gains: 24h movers\n\
     - 📊 Charts: TradingView charts"
        .to_string()
}

pub fn msg_unknown(identifier: &str) -> String {
    format!("Unknown command: {}", html_escape(identifier))
}

pub fn msg_error(notice: &str) -> String {
    format!("{} {}", WARNING_GLYPH, html_escape(notice))
}
