//! LLM: live-mode storyboard drafting.
//!
//! DESIGN
//! ======
//! Configured from environment variables ([`config::LlmConfig`]). The client
//! owns the system instruction and token limit, so callers hand over only
//! the brief. [`LlmClient`] dispatches to Anthropic or an OpenAI-compatible
//! endpoint; the rest of the server only sees the [`LlmChat`] trait.

pub mod anthropic;
pub mod config;
pub mod openai;
pub mod prompt;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
use types::DraftRequest;
pub use types::{Draft, LlmChat, LlmError};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

pub struct LlmClient {
    provider: Provider,
    model: String,
    system_instruction: String,
    max_tokens: u32,
}

enum Provider {
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// Build a client from environment variables. See
    /// [`LlmConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is invalid, the API key is missing, or
    /// the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(&LlmConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let provider = match config.provider {
            LlmProviderKind::Anthropic => Provider::Anthropic(anthropic::AnthropicClient::new(config)?),
            LlmProviderKind::OpenAi => Provider::OpenAi(openai::OpenAiClient::new(config)?),
        };
        Ok(Self {
            provider,
            model: config.model.clone(),
            system_instruction: config.system_instruction.clone(),
            max_tokens: config.max_tokens,
        })
    }

    fn request<'a>(&'a self, brief: &'a str) -> DraftRequest<'a> {
        DraftRequest { model: &self.model, system: &self.system_instruction, brief, max_tokens: self.max_tokens }
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn draft(&self, brief: &str) -> Result<Draft, LlmError> {
        let request = self.request(brief);
        match &self.provider {
            Provider::Anthropic(c) => c.draft(&request).await,
            Provider::OpenAi(c) => c.draft(&request).await,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// =============================================================================
// HTTP
// =============================================================================

fn http_client(config: &LlmConfig) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|e| LlmError::ClientBuild(e.to_string()))
}

/// Send `request` and return the body of a 2xx reply.
async fn read_success_body(request: reqwest::RequestBuilder) -> Result<String, LlmError> {
    let response = request
        .send()
        .await
        .map_err(|e| LlmError::Transport(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| LlmError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(LlmError::Status { status: status.as_u16(), body });
    }
    Ok(body)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
