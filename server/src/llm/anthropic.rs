//! Anthropic Messages API.
//!
//! A draft is one user turn carrying the brief under the storyboard system
//! instruction. Text blocks in the reply are joined in order; thinking and
//! any other block type are skipped.

use serde::{Deserialize, Serialize};

use super::config::LlmConfig;
use super::types::{Draft, DraftRequest, LlmError, TokenUsage};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns [`LlmError::ClientBuild`] if reqwest cannot build a client.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        Ok(Self { http: super::http_client(config)?, api_key: config.api_key.clone() })
    }

    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that is not a Messages reply.
    pub async fn draft(&self, request: &DraftRequest<'_>) -> Result<Draft, LlmError> {
        let body = MessagesBody::new(request);
        let builder = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body);
        let text = super::read_success_body(builder).await?;
        parse_reply(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
}

#[derive(Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> MessagesBody<'a> {
    fn new(request: &DraftRequest<'a>) -> Self {
        Self {
            model: request.model,
            max_tokens: request.max_tokens,
            system: request.system,
            messages: [UserTurn { role: "user", content: request.brief }],
        }
    }
}

#[derive(Deserialize)]
struct MessagesReply {
    content: Vec<ReplyBlock>,
    model: String,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: ReplyUsage,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ReplyBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Default)]
struct ReplyUsage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_reply(json: &str) -> Result<Draft, LlmError> {
    let reply: MessagesReply = serde_json::from_str(json).map_err(|e| LlmError::Decode(e.to_string()))?;

    let text = reply
        .content
        .into_iter()
        .filter_map(|block| match block {
            ReplyBlock::Text { text } => Some(text),
            ReplyBlock::Other => None,
        })
        .collect::<String>();

    Ok(Draft {
        text,
        model: reply.model,
        truncated: reply.stop_reason.as_deref() == Some("max_tokens"),
        usage: TokenUsage { input: reply.usage.input_tokens, output: reply.usage.output_tokens },
    })
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
