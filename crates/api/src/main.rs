//! PR chat relay server
//!
//! Receives GitHub pull request webhooks and posts a one-line alert to a
//! chat space.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api=debug".parse()?)
                .add_directive("chat=debug".parse()?)
                .add_directive("github=debug".parse()?),
        )
        .init();

    info!("Starting PR chat relay");

    // Load configuration
    let config = common::Config::from_env()?;

    // Pick the delivery transport for this deployment
    let delivery = chat::build_delivery(&config)?;

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::new(config, delivery));

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    // Start server
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
