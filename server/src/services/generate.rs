//! Generation service: brief in, two storyboard variants out.
//!
//! DESIGN
//! ======
//! Demo mode waits the configured delay and returns the canned document.
//! Live mode asks the LLM client for one draft of the brief; the client
//! supplies the storyboard system instruction. Either way the reply is one
//! text blob that [`GenerationResult::from_blob`] splits on the version
//! separator.

use storyboard::api::GenerationMode;
use storyboard::demo::DEMO_GENERATED_CONTENT;
use storyboard::{GenerationResult, extract};
use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::llm::types::LlmError;
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("brief is empty")]
    EmptyBrief,
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl ErrorCode for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBrief => "E_EMPTY_BRIEF",
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::Llm(_) => "E_LLM_ERROR",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Llm(e) if e.retryable())
    }
}

// =============================================================================
// GENERATE
// =============================================================================

/// Produce both variants for `brief`.
///
/// # Errors
///
/// [`GenerateError::EmptyBrief`] for a blank brief,
/// [`GenerateError::LlmNotConfigured`] in live mode without a client, and
/// [`GenerateError::Llm`] when the provider call fails.
pub async fn generate(state: &AppState, brief: &str) -> Result<GenerationResult, GenerateError> {
    let brief = brief.trim();
    if brief.is_empty() {
        return Err(GenerateError::EmptyBrief);
    }
    let mode = state.config.mode;
    info!(brief_len = brief.chars().count(), mode = mode.as_str(), "generate: request");

    let blob = match mode {
        GenerationMode::Demo => {
            tokio::time::sleep(state.config.demo_delay).await;
            DEMO_GENERATED_CONTENT.to_string()
        }
        GenerationMode::Live => {
            let Some(llm) = state.llm.as_ref() else {
                warn!("generate: live mode without an LLM client");
                return Err(GenerateError::LlmNotConfigured);
            };
            let draft = llm.draft(brief).await?;
            info!(
                model = %draft.model,
                input_tokens = draft.usage.input,
                output_tokens = draft.usage.output,
                "generate: llm response"
            );
            if draft.truncated {
                warn!(model = %draft.model, "generate: draft hit the token limit");
            }
            draft.text
        }
    };

    let result = GenerationResult::from_blob(&blob);
    info!(
        shots_a = extract(&result.variant_a).len(),
        shots_b = extract(&result.variant_b).len(),
        "generate: done"
    );
    Ok(result)
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
