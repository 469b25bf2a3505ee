//! Error types for the client crate.

use thiserror::Error;
use tradewinds_cache::CacheError;

use crate::config::ConfigError;

/// Any failure an accessor can surface.
///
/// Cache and config failures pass through transparently; remote
/// failures keep the HTTP status alongside whatever the API reported.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {code}: {message} (HTTP {status})")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
