/// Centralized argument handling for the price bot
///
/// Arguments are stored once in a global so that the logger, the config
/// loader and tests all read the same list.
///
/// Supported flags:
/// - `--help` / `-h`
/// - `--config <path>`
/// - `--debug-<tag>` (telegram, api, cache, config, system)
/// - `--verbose-<tag>`, `--verbose`, `--quiet`
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

use crate::config::CONFIG_FILE_PATH;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Overrides the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value that follows a flag, if any
pub fn get_arg_value(flag: &str) -> Option<String> {
    find_arg_value(&get_cmd_args(), flag)
}

fn find_arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .filter(|value| !value.starts_with("--"))
        .cloned()
}

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Path of the TOML config file (`--config <path>` or the default)
pub fn get_config_path() -> String {
    get_arg_value("--config").unwrap_or_else(|| CONFIG_FILE_PATH.to_string())
}

pub fn print_help() {
    print!("{}", help_text());
}

/// Usage text listing every flag the argument store understands
pub fn help_text() -> String {
    let lines = [
        "pricebot - Telegram crypto price bot".to_string(),
        String::new(),
        "USAGE:".to_string(),
        "    pricebot [OPTIONS]".to_string(),
        String::new(),
        "ENVIRONMENT:".to_string(),
        "    BOT_TOKEN              Telegram bot token (required, .env supported)".to_string(),
        String::new(),
        "OPTIONS:".to_string(),
        format!("    --config <path>        Config file (default: {})", CONFIG_FILE_PATH),
        "    --debug-<tag>          Debug logs for one tag (telegram, api, cache, config, system)"
            .to_string(),
        "    --verbose-<tag>        Debug and verbose logs for one tag".to_string(),
        "    --verbose              Enable all debug and verbose logs".to_string(),
        "    --quiet                Only warnings and errors".to_string(),
        "    -h, --help             Print this help".to_string(),
    ];
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_arg_value() {
        let list = args(&["pricebot", "--config", "custom.toml", "--verbose"]);
        assert_eq!(find_arg_value(&list, "--config"), Some("custom.toml".to_string()));
        assert_eq!(find_arg_value(&list, "--missing"), None);
    }

    #[test]
    fn test_flag_without_value() {
        let list = args(&["pricebot", "--config", "--verbose"]);
        assert_eq!(find_arg_value(&list, "--config"), None);

        let list = args(&["pricebot", "--config"]);
        assert_eq!(find_arg_value(&list, "--config"), None);
    }

    #[test]
    fn test_help_lists_log_flags() {
        let help = help_text();
        for flag in ["--config <path>", "--debug-<tag>", "--verbose-<tag>", "--verbose ", "--quiet"] {
            assert!(help.contains(flag), "missing {}", flag);
        }
        assert!(help.contains(CONFIG_FILE_PATH));
    }

    // The only test touching the global store, so no ordering issues
    #[test]
    fn test_global_args() {
        set_cmd_args(args(&["pricebot", "--config", "alt.toml", "--debug-cache"]));
        assert_eq!(get_config_path(), "alt.toml");
        assert!(has_arg("--debug-cache"));
        assert!(!is_help_requested());

        set_cmd_args(args(&["pricebot", "-h"]));
        assert!(is_help_requested());
        assert_eq!(get_config_path(), CONFIG_FILE_PATH);
    }
}
