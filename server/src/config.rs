//! Server configuration read from the environment.

use std::time::Duration;

use storyboard::api::GenerationMode;

use crate::error::ErrorCode;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DEMO_DELAY_MS: u64 = 8000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "E_CONFIG_INVALID",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub mode: GenerationMode,
    pub demo_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            mode: GenerationMode::Demo,
            demo_delay: Duration::from_millis(DEFAULT_DEMO_DELAY_MS),
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, `GENERATION_MODE` and `DEMO_DELAY_MS`. Unset variables
    /// take their defaults. Live-mode settings live in
    /// [`LlmConfig`](crate::llm::config::LlmConfig).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = parse_var(&lookup, "PORT", |v| v.parse::<u16>().ok())?.unwrap_or(defaults.port);
        let mode = parse_var(&lookup, "GENERATION_MODE", GenerationMode::parse)?.unwrap_or(defaults.mode);
        let demo_delay = parse_var(&lookup, "DEMO_DELAY_MS", |v| v.parse::<u64>().ok())?
            .map_or(defaults.demo_delay, Duration::from_millis);

        Ok(Self { port, mode, demo_delay })
    }
}

/// Look up `var` and parse it. Unset is `Ok(None)`; set but unparseable is
/// [`ConfigError::Invalid`].
pub(crate) fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    parse(value.trim())
        .map(Some)
        .ok_or(ConfigError::Invalid { var, value })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
