//! Webhook route

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::Response,
};
use chat::{OutboundMessage, CHAT_SPACE};
use github::{check_request, parse_pull_request};
use tracing::{debug, error, info, warn};

use crate::error::{text_response, ApiError, ApiResult};
use crate::state::AppState;

/// GitHub caps webhook payloads at 25 MB
pub(crate) const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// First `key` query parameter, if any
fn first_key(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(name, _)| name == "key")
        .map(|(_, value)| value.as_str())
}

/// Relay a pull request event to the chat space.
///
/// Any method is accepted; the path and `key` parameter are checked against
/// the configured secrets before the body is read.
pub async fn github(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(params): Query<Vec<(String, String)>>,
    body: Body,
) -> ApiResult<Response> {
    info!("Endpoint reached {}", uri.path());

    check_request(
        uri.path(),
        first_key(&params),
        &state.config.secure_endpoint,
        &state.config.secure_key,
    )
    .map_err(|rejection| {
        warn!("Rejected request to {}: {}", uri.path(), rejection);
        ApiError::from(rejection)
    })?;

    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        error!("Error reading body: {}", e);
        ApiError::BodyUnreadable
    })?;
    debug!("Body: {}", String::from_utf8_lossy(&body));

    let event = parse_pull_request(&body).map_err(|e| {
        error!("Error parsing GitHub payload: {}", e);
        ApiError::DecodeFailed
    })?;

    let message = OutboundMessage::for_event(&event, state.config.alert_style);
    let thread_key = event.thread_key();

    state
        .delivery
        .deliver(&message, CHAT_SPACE, &thread_key)
        .await
        .map_err(|e| {
            error!("Error posting to room: {}", e);
            ApiError::DeliveryFailed
        })?;

    info!(
        "Relayed {} on {}#{}",
        event.action, event.repository.full_name, event.number
    );

    Ok(text_response(StatusCode::ACCEPTED, "Success"))
}
