//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since generation only
//! ever starts from a browser click.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as a `String` for logging. The UI never shows it; it
//! shows the fixed failure message instead.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use storyboard::GenerationResult;
use storyboard::api::ServiceStatus;
#[cfg(any(test, feature = "hydrate"))]
use storyboard::api::ErrorBody;

#[cfg(any(test, feature = "hydrate"))]
const GENERATE_ENDPOINT: &str = "/api/generate";

#[cfg(any(test, feature = "hydrate"))]
const STATUS_ENDPOINT: &str = "/api/status";

#[cfg(any(test, feature = "hydrate"))]
fn generate_failed_message(status: u16, body: Option<&ErrorBody>) -> String {
    match body {
        Some(body) => format!("generate failed: {status} {} ({})", body.code, body.message),
        None => format!("generate failed: {status}"),
    }
}

/// Ask the server for both variants of `brief`.
///
/// # Errors
///
/// Returns a description of the transport failure, non-2xx status, or
/// undecodable body.
pub async fn request_generation(brief: &str) -> Result<GenerationResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = storyboard::api::GenerateRequest { brief: brief.to_owned() };
        let resp = gloo_net::http::Request::post(GENERATE_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.json::<ErrorBody>().await.ok();
            return Err(generate_failed_message(resp.status(), body.as_ref()));
        }
        resp.json::<GenerationResult>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = brief;
        Err("not available on server".to_owned())
    }
}

/// Fetch `/api/status`. `None` on failure or on the server.
pub async fn fetch_status() -> Option<ServiceStatus> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(STATUS_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ServiceStatus>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
