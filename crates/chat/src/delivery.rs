//! Delivery of alerts to a chat space

use std::sync::Arc;

use async_trait::async_trait;
use common::{Config, Transport};
use thiserror::Error;
use tracing::info;

use crate::auth::{AuthError, ServiceAccountKey, ServiceAccountTokenSource, CHAT_BOT_SCOPE};
use crate::chat_api::ChatApiTransport;
use crate::message::OutboundMessage;
use crate::relay::RelayTransport;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("chat backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("credential error: {0}")]
    Auth(#[from] AuthError),
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Something that can post a message into a chat space thread
#[async_trait]
pub trait Delivery: Send + Sync {
    /// Post `message` to `space`, grouped under `thread_key`.
    ///
    /// Fails on network errors and on any non-2xx response.
    async fn deliver(
        &self,
        message: &OutboundMessage,
        space: &str,
        thread_key: &str,
    ) -> Result<(), DeliveryError>;
}

/// Build the transport selected by the configuration
pub fn build_delivery(config: &Config) -> Result<Arc<dyn Delivery>, DeliveryError> {
    let client = reqwest::Client::new();

    let delivery: Arc<dyn Delivery> = match &config.transport {
        Transport::Relay { url } => {
            info!("Delivering alerts through relay {}", url);
            Arc::new(RelayTransport::new(
                client,
                url.clone(),
                config.secure_key.clone(),
            ))
        }
        Transport::ServiceAccount {
            credentials_path,
            api_base_url,
        } => {
            let key = ServiceAccountKey::from_file(credentials_path)?;
            info!(
                "Delivering alerts to {} as {}",
                api_base_url, key.client_email
            );
            let tokens = ServiceAccountTokenSource::new(client.clone(), key, CHAT_BOT_SCOPE)?;
            Arc::new(ChatApiTransport::new(
                client,
                api_base_url.clone(),
                Arc::new(tokens),
            ))
        }
    };

    Ok(delivery)
}

/// Drain a downstream response, turning non-2xx statuses into errors
pub(crate) async fn read_response(resp: reqwest::Response) -> Result<String, DeliveryError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(DeliveryError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
