//! Webhook payload parsing

use thiserror::Error;
use tracing::debug;

use crate::events::PullRequestEvent;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid pull request payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a `pull_request` webhook body.
///
/// Unknown fields are ignored and missing ones take their zero value, so
/// this only fails on malformed JSON or on a field of the wrong type.
pub fn parse_pull_request(body: &[u8]) -> Result<PullRequestEvent, DecodeError> {
    debug!("Parsing pull request payload ({} bytes)", body.len());
    Ok(serde_json::from_slice(body)?)
}
