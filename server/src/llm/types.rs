//! LLM types: one storyboard draft in, one markdown blob out.
//!
//! Generation never holds a conversation. A draft is the storyboard system
//! instruction plus the user's brief, and the reply is read as a single text
//! blob that still carries the version separator. Providers map these shapes
//! onto their own wire formats.

use crate::config::ConfigError;
use crate::error::ErrorCode;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while configuring or calling a provider.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A live-mode variable is set but does not parse.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Neither `LLM_API_KEY` nor the provider's own key variable is set.
    #[error("missing API key: set LLM_API_KEY or {fallback}")]
    MissingApiKey { fallback: &'static str },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("provider request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}")]
    Status { status: u16, body: String },

    /// The reply body did not have the provider's documented shape.
    #[error("provider reply could not be decoded: {0}")]
    Decode(String),
}

impl ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::ClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Transport(_) => "E_PROVIDER_TRANSPORT",
            Self::Status { .. } => "E_PROVIDER_STATUS",
            Self::Decode(_) => "E_PROVIDER_DECODE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Everything a provider needs to write one draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub brief: &'a str,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
}

/// The provider's reply, reduced to what generation uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// All text the provider returned, joined in order.
    pub text: String,
    pub model: String,
    /// The provider stopped at `max_tokens`; variant B is likely cut short.
    pub truncated: bool,
    pub usage: TokenUsage,
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Writes storyboard drafts. Implemented by [`LlmClient`](super::LlmClient)
/// and by the scripted mock in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Draft both variants for an already-trimmed, non-empty `brief`.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the reply is
    /// malformed.
    async fn draft(&self, brief: &str) -> Result<Draft, LlmError>;

    /// Model name used in logs and `/api/status`.
    fn model(&self) -> &str;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
