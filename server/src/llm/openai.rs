//! OpenAI-compatible `/chat/completions`.
//!
//! Works against any gateway that speaks the Chat Completions shape; the root
//! comes from `LLM_BASE_URL`. The system instruction travels as a leading
//! `system` turn and the reply is `choices[0].message.content`.

use serde::{Deserialize, Serialize};

use super::config::LlmConfig;
use super::types::{Draft, DraftRequest, LlmError, TokenUsage};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::ClientBuild`] if reqwest cannot build a client.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        Ok(Self {
            http: super::http_client(config)?,
            api_key: config.api_key.clone(),
            endpoint: completions_endpoint(&config.base_url),
        })
    }

    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// without a first choice.
    pub async fn draft(&self, request: &DraftRequest<'_>) -> Result<Draft, LlmError> {
        let body = CompletionBody::new(request);
        let builder = self.http.post(&self.endpoint).bearer_auth(&self.api_key).json(&body);
        let text = super::read_success_body(builder).await?;
        parse_reply(&text)
    }
}

fn completions_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Turn<'a>>,
}

#[derive(Serialize)]
struct Turn<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> CompletionBody<'a> {
    fn new(request: &DraftRequest<'a>) -> Self {
        let mut messages = Vec::with_capacity(2);
        if !request.system.trim().is_empty() {
            messages.push(Turn { role: "system", content: request.system });
        }
        messages.push(Turn { role: "user", content: request.brief });
        Self { model: request.model, max_tokens: request.max_tokens, messages }
    }
}

#[derive(Deserialize)]
struct CompletionReply {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: CompletionUsage,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize, Default)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize, Default)]
struct CompletionUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_reply(json: &str) -> Result<Draft, LlmError> {
    let reply: CompletionReply = serde_json::from_str(json).map_err(|e| LlmError::Decode(e.to_string()))?;
    let Some(choice) = reply.choices.into_iter().next() else {
        return Err(LlmError::Decode("reply has no choices".to_string()));
    };

    Ok(Draft {
        text: choice.message.content.unwrap_or_default(),
        model: reply.model,
        truncated: choice.finish_reason.as_deref() == Some("length"),
        usage: TokenUsage { input: reply.usage.prompt_tokens, output: reply.usage.completion_tokens },
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
