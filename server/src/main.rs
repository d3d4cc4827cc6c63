#![recursion_limit = "256"]

mod config;
mod error;
mod llm;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

use storyboard::api::GenerationMode;

use crate::config::ServerConfig;
use crate::llm::{LlmChat, LlmClient, LlmError};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            return ExitCode::FAILURE;
        }
    };

    let llm = match config.mode {
        GenerationMode::Demo => None,
        GenerationMode::Live => match live_llm(LlmClient::from_env()) {
            Ok(llm) => llm,
            Err(e) => {
                tracing::error!(error = %e, "invalid LLM configuration");
                return ExitCode::FAILURE;
            }
        },
    };

    let port = config.port;
    let mode = config.mode;
    let state = state::AppState::new(config, llm);

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, mode = mode.as_str(), "storyboard studio listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Settle the live-mode client. A malformed variable aborts startup; any
/// other failure (usually a missing key) leaves generation answering 503.
fn live_llm(client: Result<LlmClient, LlmError>) -> Result<Option<Arc<dyn LlmChat>>, LlmError> {
    match client {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            let client: Arc<dyn LlmChat> = Arc::new(client);
            Ok(Some(client))
        }
        Err(e @ LlmError::Config(_)) => Err(e),
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, generation unavailable");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
