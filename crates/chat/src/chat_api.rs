//! OAuth2 transport: POST straight to the chat API's messages endpoint

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::auth::TokenSource;
use crate::delivery::{read_response, Delivery, DeliveryError};
use crate::message::OutboundMessage;

/// Sends alerts to `{base_url}/v1/spaces/{space}/messages` as a service account
pub struct ChatApiTransport {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl ChatApiTransport {
    pub fn new(client: reqwest::Client, base_url: String, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            client,
            base_url,
            tokens,
        }
    }

    fn messages_url(&self, space: &str) -> String {
        format!(
            "{}/v1/spaces/{}/messages",
            self.base_url.trim_end_matches('/'),
            space
        )
    }
}

#[async_trait]
impl Delivery for ChatApiTransport {
    async fn deliver(
        &self,
        message: &OutboundMessage,
        space: &str,
        thread_key: &str,
    ) -> Result<(), DeliveryError> {
        let token = self.tokens.access_token().await?;
        let body = serde_json::to_vec(message)?;
        let url = self.messages_url(space);
        debug!("POST {}?threadKey={}", url, thread_key);

        let resp = self
            .client
            .post(&url)
            .query(&[("threadKey", thread_key)])
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()
            .await?;

        let body = read_response(resp).await?;
        info!("Chat API response: {}", body);

        Ok(())
    }
}
