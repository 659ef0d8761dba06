//! Application state

use std::sync::Arc;

use chat::Delivery;
use common::Config;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub delivery: Arc<dyn Delivery>,
}

impl AppState {
    pub fn new(config: Config, delivery: Arc<dyn Delivery>) -> Self {
        Self { config, delivery }
    }
}
