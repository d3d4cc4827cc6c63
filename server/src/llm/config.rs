//! Live-mode LLM settings.
//!
//! Read with the same lookup helper as [`ServerConfig`](crate::config::ServerConfig),
//! so parsing is tested against a map instead of the process environment.
//! Defaults are sized for one two-variant storyboard document per request.

use std::fmt;
use std::time::Duration;

use super::prompt::storyboard_instruction;
use super::types::LlmError;
use crate::config::parse_var;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Both variants with full shot tables run to several thousand tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 8192;
/// Writing both variants routinely takes longer than a minute.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(180);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderKind {
    /// Anthropic Messages API.
    Anthropic,
    /// Any endpoint speaking `OpenAI` Chat Completions.
    OpenAi,
}

impl LlmProviderKind {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "anthropic" => Some(Self::Anthropic),
            "openai" => Some(Self::OpenAi),
            _ => None,
        }
    }

    #[must_use]
    pub fn default_model(self) -> &'static str {
        match self {
            Self::Anthropic => "claude-sonnet-4-5-20250929",
            Self::OpenAi => "gpt-4o",
        }
    }

    /// Provider-conventional key variable, read when `LLM_API_KEY` is unset.
    #[must_use]
    pub fn key_var(self) -> &'static str {
        match self {
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub api_key: String,
    pub model: String,
    /// Chat Completions root; unused by Anthropic.
    pub base_url: String,
    pub max_tokens: u32,
    pub system_instruction: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish_non_exhaustive()
    }
}

impl LlmConfig {
    /// Config for `provider` with every other setting at its default.
    #[must_use]
    pub fn new(provider: LlmProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: provider.default_model().to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_instruction: storyboard_instruction(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Read live-mode settings from the environment.
    ///
    /// - `LLM_PROVIDER`: `anthropic` (default) or `openai`
    /// - `LLM_API_KEY`, else `ANTHROPIC_API_KEY` / `OPENAI_API_KEY`
    /// - `LLM_MODEL`: provider default when absent
    /// - `LLM_BASE_URL`: Chat Completions root for `openai`
    /// - `GENERATE_MAX_TOKENS`: default 8192
    /// - `LLM_REQUEST_TIMEOUT_SECS` / `LLM_CONNECT_TIMEOUT_SECS`: 180 / 10
    ///
    /// # Errors
    ///
    /// [`LlmError::MissingApiKey`] without a key, [`LlmError::Config`] when a
    /// variable is set but does not parse.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let provider =
            parse_var(&lookup, "LLM_PROVIDER", LlmProviderKind::parse)?.unwrap_or(LlmProviderKind::Anthropic);

        let api_key = ["LLM_API_KEY", provider.key_var()]
            .into_iter()
            .filter_map(&lookup)
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or(LlmError::MissingApiKey { fallback: provider.key_var() })?;

        let mut config = Self::new(provider, api_key);
        if let Some(model) = lookup("LLM_MODEL").map(|m| m.trim().to_string()).filter(|m| !m.is_empty()) {
            config.model = model;
        }
        if let Some(url) = lookup("LLM_BASE_URL") {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(max_tokens) =
            parse_var(&lookup, "GENERATE_MAX_TOKENS", |v| v.parse::<u32>().ok().filter(|n| *n > 0))?
        {
            config.max_tokens = max_tokens;
        }
        if let Some(timeout) = parse_var(&lookup, "LLM_REQUEST_TIMEOUT_SECS", parse_secs)? {
            config.request_timeout = timeout;
        }
        if let Some(timeout) = parse_var(&lookup, "LLM_CONNECT_TIMEOUT_SECS", parse_secs)? {
            config.connect_timeout = timeout;
        }
        Ok(config)
    }
}

fn parse_secs(raw: &str) -> Option<Duration> {
    raw.parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
