//! tradewinds Client - Remote Accessors
//!
//! Blocking HTTP accessors for the remote game API, one module per
//! resource family. Every accessor reads through the on-disk cache in
//! `tradewinds-cache`: hits never touch the network, misses fetch and
//! persist before returning.
//!
//! The caller owns retry policy. A failed request surfaces as
//! [`ClientError`] exactly once; nothing here retries, backs off, or
//! refreshes credentials.

pub mod config;
pub mod contracts;
pub mod error;
pub mod http;

pub use config::{ClientConfig, ConfigError};
pub use contracts::ContractsClient;
pub use error::ClientError;
pub use http::ApiClient;
