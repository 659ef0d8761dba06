//! Service-account OAuth2 credentials for the chat API
//!
//! Implements the JWT bearer grant: an RS256-signed assertion built from the
//! service-account key is exchanged at the key's `token_uri` for a short-lived
//! access token. Tokens are reused until shortly before they expire.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Permission needed to post messages as a chat bot
pub const CHAT_BOT_SCOPE: &str = "https://www.googleapis.com/auth/chat.bot";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("failed to read credentials file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid service account key: {0}")]
    InvalidKey(String),
    #[error("failed to sign assertion: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),
    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Service-account key file, as downloaded from the cloud console
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self, AuthError> {
        serde_json::from_str(json).map_err(|e| AuthError::InvalidKey(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, AuthError> {
        let json = std::fs::read_to_string(path).map_err(|source| AuthError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Source of bearer tokens for outbound requests
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String, AuthError>;
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Exchanges signed service-account assertions for access tokens
pub struct ServiceAccountTokenSource {
    client: reqwest::Client,
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    scope: String,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenSource {
    /// Tokens are refreshed this long before they expire
    const EXPIRY_MARGIN_SECS: i64 = 60;

    pub fn new(
        client: reqwest::Client,
        key: ServiceAccountKey,
        scope: &str,
    ) -> Result<Self, AuthError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;

        Ok(Self {
            client,
            key,
            encoding_key,
            scope: scope.to_string(),
            cached: Mutex::new(None),
        })
    }

    /// Sign the assertion presented to the token endpoint
    pub(crate) fn assertion(&self, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = AssertionClaims {
            iss: self.key.client_email.clone(),
            scope: self.scope.clone(),
            aud: self.key.token_uri.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    async fn fetch_token(&self) -> Result<CachedToken, AuthError> {
        let now = Utc::now();
        let assertion = self.assertion(now)?;

        debug!("Requesting access token from {}", self.key.token_uri);
        let resp = self
            .client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|e| {
                warn!("Failed to read token endpoint error body: {}", e);
                String::new()
            });
            return Err(AuthError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = resp.json().await?;
        info!(
            "Obtained access token for {} (expires in {}s)",
            self.key.client_email, token.expires_in
        );

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}

#[async_trait]
impl TokenSource for ServiceAccountTokenSource {
    async fn access_token(&self) -> Result<String, AuthError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if Utc::now() + Duration::seconds(Self::EXPIRY_MARGIN_SECS) < token.expires_at {
                return Ok(token.access_token.clone());
            }
            debug!("Cached access token is about to expire, refreshing");
        }

        let token = self.fetch_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);

        Ok(access_token)
    }
}
