//! Wire message sent to the chat backend

use serde::{Deserialize, Serialize};

/// Space every alert is posted to
pub const CHAT_SPACE: &str = "AAAAV2Ons90";

/// Chat message body, serialized as `{"text": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub text: String,
}

impl OutboundMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
