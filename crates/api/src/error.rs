//! API error handling
//!
//! Every failure is turned into a status code and a short plaintext reason.
//! The content type is always labelled as JSON, matching what existing
//! webhook consumers have been receiving.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use github::GateRejection;

pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Ways a webhook request can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Path or shared key did not match
    AuthRejected(GateRejection),
    /// Request body could not be read
    BodyUnreadable,
    /// Request body was not a valid pull request payload
    DecodeFailed,
    /// The chat backend could not be reached or refused the alert
    DeliveryFailed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AuthRejected(_) => StatusCode::FORBIDDEN,
            ApiError::BodyUnreadable | ApiError::DecodeFailed | ApiError::DeliveryFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::AuthRejected(GateRejection::Endpoint) => "Bad Request",
            ApiError::AuthRejected(GateRejection::SharedKey) => "Bad Shared Key",
            ApiError::BodyUnreadable => "Error Reading Body",
            ApiError::DecodeFailed => "Error Reading Payload",
            ApiError::DeliveryFailed => "Error Sending Alert",
        }
    }
}

impl From<GateRejection> for ApiError {
    fn from(rejection: GateRejection) -> Self {
        ApiError::AuthRejected(rejection)
    }
}

/// Plaintext response carrying the JSON content type
pub fn text_response(status: StatusCode, body: &'static str) -> Response {
    (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON))],
        body,
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        text_response(self.status(), self.reason())
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
