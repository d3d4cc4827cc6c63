//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed server config and the optional LLM client. There is no
//! shared mutable state: every generation request is independent.

use std::sync::Arc;

use storyboard::api::{GenerationMode, ServiceStatus};

use crate::config::ServerConfig;
use crate::llm::LlmChat;

/// Clone is required by Axum; the LLM client is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    /// Optional LLM client. `None` in demo mode or when live mode could not
    /// be configured.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { config, llm }
    }

    /// What `/api/status` reports. The model is only named in live mode.
    #[must_use]
    pub fn status(&self) -> ServiceStatus {
        let model = match self.config.mode {
            GenerationMode::Live => self.llm.as_ref().map(|llm| llm.model().to_string()),
            GenerationMode::Demo => None,
        };
        ServiceStatus { mode: self.config.mode, model }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
