//! SolrKit Core Library
//!
//! This crate provides the plumbing shared by the SolrKit client:
//! - Error types for the whole workspace
//! - JSON codec helpers
//! - HTTP transport abstraction and its reqwest-backed implementation
//! - Connection configuration

pub mod codec;
pub mod config;
pub mod transport;

// Re-export commonly used types
pub use config::ConnectionConfig;
pub use transport::{HttpTransport, Method, Transport};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hostname: [{0}]")]
    InvalidHost(String),

    #[error("invalid port: [{0}]")]
    InvalidPort(u32),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to decode response body as JSON")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode object as JSON")]
    Encode(#[source] serde_json::Error),

    #[error("expected a JSON object in response, got {found}")]
    UnexpectedShape { found: &'static str },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
