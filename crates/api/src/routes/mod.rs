//! API routes

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::state::AppState;

pub mod health;
pub mod webhooks;

/// Build the router: `GET /health`, with every other path and method handed
/// to the webhook handler, which checks the path itself.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health).fallback(webhooks::github))
        .fallback(webhooks::github)
        .with_state(state)
}
