//! Generation and status endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use storyboard::GenerationResult;
use storyboard::api::{GenerateRequest, ServiceStatus};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::generate::{self as service, GenerateError};
use crate::state::AppState;

/// `POST /api/generate`
///
/// # Errors
///
/// 400 for a blank brief, 503 when live mode has no LLM client, 502 when
/// the provider call fails.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerationResult>, ApiError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "api: generate");
    match service::generate(&state, &req.brief).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            warn!(%request_id, error = %e, "api: generate failed");
            Err(ApiError::new(generate_error_to_status(&e), &e))
        }
    }
}

/// `GET /api/status`
pub async fn status(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(state.status())
}

pub(crate) fn generate_error_to_status(err: &GenerateError) -> StatusCode {
    match err {
        GenerateError::EmptyBrief => StatusCode::BAD_REQUEST,
        GenerateError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        GenerateError::Llm(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
