//! Health check route

use std::sync::Arc;

use axum::{extract::State, Json};
use common::Transport;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Which delivery transport this deployment uses
    transport: &'static str,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let transport = match state.config.transport {
        Transport::Relay { .. } => "relay",
        Transport::ServiceAccount { .. } => "service_account",
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        transport,
    })
}
