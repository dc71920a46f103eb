//! Log formatting and console output with ANSI colors
//!
//! Errors and warnings go to stderr, everything else to stdout. Broken pipes
//! (e.g. `pricebot | head`) are ignored instead of panicking.

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, stdout, ErrorKind, Write};

/// Width of the tag column
const TAG_WIDTH: usize = 8;

/// Width of the level column
const LEVEL_WIDTH: usize = 7;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();
    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_level(level),
        message
    );

    match level {
        LogLevel::Error | LogLevel::Warning => write_safe(&mut stderr(), &line),
        _ => write_safe(&mut stdout(), &line),
    }
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Telegram => label.bright_cyan().bold(),
        LogTag::Api => label.bright_magenta().bold(),
        LogTag::Cache => label.bright_blue().bold(),
        LogTag::Config => label.bright_green().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => label.bright_red().bold(),
        LogLevel::Warning => label.yellow().bold(),
        LogLevel::Info => label.normal(),
        LogLevel::Debug => label.bright_black(),
        LogLevel::Verbose => label.dimmed(),
    }
}

fn write_safe(out: &mut dyn Write, line: &str) {
    if let Err(e) = writeln!(out, "{}", line) {
        if e.kind() != ErrorKind::BrokenPipe {
            eprintln!("logger write failed: {}", e);
        }
    }
}
