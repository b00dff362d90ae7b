//! Errors raised before anything reaches the network.

use thiserror::Error;

/// Problems with the transport configuration or an operation descriptor.
///
/// These point at programmer errors rather than anything the server did.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bad endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A setting the transport cannot work without was left empty.
    #[error("transport config has no {field}")]
    MissingField { field: &'static str },

    /// Malformed path pattern, or a placeholder nobody filled in.
    #[error("cannot expand path: {message}")]
    InvalidPathTemplate { message: String },

    /// Neither side of the scheme negotiation had anything in common.
    #[error("No usable scheme for {operation}: operation offers {offered}")]
    UnsupportedScheme { operation: String, offered: String },

    /// A header handed to the transport builder was rejected.
    #[error("default header {name:?} rejected: {reason}")]
    InvalidDefaultHeader { name: String, reason: String },
}

impl ConfigError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            message: message.into(),
        }
    }
}
