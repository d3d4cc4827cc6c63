//! Error codes and the JSON error response.
//!
//! Every fallible module defines its own `thiserror` enum and implements
//! [`ErrorCode`]. Routes turn those into an [`ApiError`], which renders as
//! an [`ErrorBody`] with the matching HTTP status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use storyboard::api::ErrorBody;

/// Grepable error code plus a retry hint, shared by all server errors.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Build the wire body for any coded error.
pub fn error_body(err: &(impl ErrorCode + ?Sized)) -> ErrorBody {
    ErrorBody { message: err.to_string(), code: err.error_code().to_string(), retryable: err.retryable() }
}

/// An HTTP status paired with a coded error body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { status, body: error_body(err) }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
