//! Common types and utilities for the PR chat relay

pub mod config;
pub mod error;

pub use config::{AlertStyle, Config, Transport};
pub use error::{Error, Result};
