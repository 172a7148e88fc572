//! Relay routes.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use postwright_error::{EMPTY_CONTENT_MESSAGE, ProviderError, ProviderErrorKind};
use postwright_interface::CompletionProvider;
use postwright_models::RelayResponse;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, instrument, warn};

/// Error body for a request that is not valid JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";

/// Error body for a request missing one of its fields.
pub const MISSING_FIELDS_MESSAGE: &str = "brief, apiKey, and systemPrompt are required";

/// Relay state holding the upstream provider.
pub struct RelayState<P> {
    provider: Arc<P>,
}

impl<P> RelayState<P> {
    /// Creates relay state around a provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

impl<P> Clone for RelayState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

/// Creates the relay router.
pub fn create_router<P>(state: RelayState<P>) -> Router
where
    P: CompletionProvider + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate", post(generate::<P>))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

fn reply(status: StatusCode, body: RelayResponse) -> Response {
    (status, Json(body)).into_response()
}

/// Trimmed, non-empty string field of a JSON object.
fn required<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Upstream failure text in the form `<status> <message>` when a status is known.
fn upstream_message(error: &ProviderError) -> String {
    match error.kind() {
        ProviderErrorKind::Status { status, message } if !message.trim().is_empty() => {
            format!("{} {}", status, message.trim())
        }
        kind => kind.to_string(),
    }
}

/// Generate one post.
#[instrument(skip_all, fields(body_len = body.len()))]
async fn generate<P>(State(state): State<RelayState<P>>, body: Bytes) -> Response
where
    P: CompletionProvider + 'static,
{
    let Ok(body) = serde_json::from_slice::<Value>(&body) else {
        warn!("Rejected request with invalid JSON");
        return reply(
            StatusCode::BAD_REQUEST,
            RelayResponse::failure(INVALID_JSON_MESSAGE),
        );
    };

    let (Some(brief), Some(api_key), Some(system_prompt)) = (
        required(&body, "brief"),
        required(&body, "apiKey"),
        required(&body, "systemPrompt"),
    ) else {
        warn!("Rejected request with missing fields");
        return reply(
            StatusCode::BAD_REQUEST,
            RelayResponse::failure(MISSING_FIELDS_MESSAGE),
        );
    };

    match state.provider.complete(brief, system_prompt, api_key).await {
        Ok(content) if !content.trim().is_empty() => reply(
            StatusCode::OK,
            RelayResponse::success(content.trim()),
        ),
        Ok(_) => {
            warn!("Upstream returned empty content");
            reply(
                StatusCode::BAD_GATEWAY,
                RelayResponse::failure(EMPTY_CONTENT_MESSAGE),
            )
        }
        Err(e) if matches!(e.kind(), ProviderErrorKind::EmptyContent) => {
            warn!("Upstream returned empty content");
            reply(
                StatusCode::BAD_GATEWAY,
                RelayResponse::failure(EMPTY_CONTENT_MESSAGE),
            )
        }
        Err(e) => {
            error!(error = %e, "Upstream generation failed");
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                RelayResponse::failure(format!(
                    "Failed to generate post: {}",
                    upstream_message(&e)
                )),
            )
        }
    }
}
