//! Error types

use thiserror::Error;

/// Main error type for the relay
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
