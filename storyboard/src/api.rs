//! HTTP wire types shared by the server routes and the browser client.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub brief: String,
}

/// Error body returned by every `/api/*` failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
    pub retryable: bool,
}

/// How the server answers generation requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Canned document after a fixed delay. No credentials needed.
    #[default]
    Demo,
    /// One LLM call per request.
    Live,
}

impl GenerationMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Live => "live",
        }
    }

    /// Parse `demo` / `live`, case-insensitive. `None` for anything else.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "demo" => Some(Self::Demo),
            "live" => Some(Self::Live),
            _ => None,
        }
    }
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub mode: GenerationMode,
    pub model: Option<String>,
}

impl ServiceStatus {
    /// Footer label shown under the sidebar.
    #[must_use]
    pub fn footer_label(&self) -> String {
        match (self.mode, self.model.as_deref()) {
            (GenerationMode::Live, Some(model)) => format!("{model} Generation"),
            (GenerationMode::Live, None) => "Live Generation".to_string(),
            (GenerationMode::Demo, _) => crate::consts::DEMO_FOOTER_LABEL.to_string(),
        }
    }
}
