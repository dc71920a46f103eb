/// Log tags identifying the subsystem a message comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Telegram,
    Api,
    Cache,
    Config,
}

impl LogTag {
    pub const ALL: [LogTag; 5] = [
        LogTag::System,
        LogTag::Telegram,
        LogTag::Api,
        LogTag::Cache,
        LogTag::Config,
    ];

    /// Key used by `--debug-<key>` / `--verbose-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system",
            LogTag::Telegram => "telegram",
            LogTag::Api => "api",
            LogTag::Cache => "cache",
            LogTag::Config => "config",
        }
        .to_string()
    }

    /// Upper-case label without color codes
    pub fn to_plain_string(&self) -> String {
        self.to_debug_key().to_uppercase()
    }

    pub fn from_debug_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.to_debug_key() == key)
    }
}
