//! Static-token transport: POST to a relay that forwards to the chat platform

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, info};

use crate::delivery::{read_response, Delivery, DeliveryError};
use crate::message::OutboundMessage;

const SPACE: &str = "Space";
const THREAD_KEY: &str = "ThreadKey";
const DESTINATION: &str = "Destination";
const DESTINATION_GOOGLE: &str = "google";

/// Sends alerts to a relay URL, authenticated with the shared key
pub struct RelayTransport {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl RelayTransport {
    pub fn new(client: reqwest::Client, url: String, token: String) -> Self {
        Self { client, url, token }
    }
}

#[async_trait]
impl Delivery for RelayTransport {
    async fn deliver(
        &self,
        message: &OutboundMessage,
        space: &str,
        thread_key: &str,
    ) -> Result<(), DeliveryError> {
        let body = serde_json::to_vec(message)?;
        debug!("POST {} (space {}, thread {})", self.url, space, thread_key);

        let resp = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(SPACE, space)
            .header(THREAD_KEY, thread_key)
            .header(CONTENT_TYPE, "application/json")
            .header(DESTINATION, DESTINATION_GOOGLE)
            .body(body)
            .send()
            .await?;

        let body = read_response(resp).await?;
        info!("Relay response: {}", body);

        Ok(())
    }
}
