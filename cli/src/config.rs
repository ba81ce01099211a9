//! Shell configuration read from the environment.

/// Prompt printed before each line when `TASIADB_PROMPT` is not set.
pub const DEFAULT_PROMPT: &str = "tasiadb> ";

/// Environment variable overriding the prompt.
pub const PROMPT_VAR: &str = "TASIADB_PROMPT";

/// Settings for one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text printed before reading each line.
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_owned(),
        }
    }
}

impl ReplConfig {
    /// Build the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }
        config
    }
}
