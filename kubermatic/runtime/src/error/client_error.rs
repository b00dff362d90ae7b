//! Failures below the HTTP status line.

use thiserror::Error;

/// Failures of the HTTP round trip itself.
///
/// Non-2xx statuses are *not* client errors: they reach the operation's
/// reader and come back as typed outcomes.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Request(#[from] reqwest::Error),

    /// The call outlived its effective timeout.
    #[error("no response within {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    #[error("could not reach the API server: {0}")]
    Connection(String),
}

impl ClientError {
    /// Returns `true` if repeating the call could plausibly succeed.
    ///
    /// The client never retries on its own; this is a hint for callers
    /// that wrap operations in their own retry policy.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(source) => source.is_timeout() || source.is_connect(),
            _ => true,
        }
    }

    /// Classifies a `reqwest` failure, folding timeouts and connect errors
    /// into their dedicated variants.
    pub fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                duration_ms: timeout_ms,
            }
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Request(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_transient() {
        assert!(ClientError::Timeout { duration_ms: 5000 }.is_transient());
    }

    #[test]
    fn test_refused_connection_is_transient() {
        let err = ClientError::Connection("connection refused".to_string());
        assert!(err.is_transient());
        assert_eq!(
            err.to_string(),
            "could not reach the API server: connection refused"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = ClientError::Timeout { duration_ms: 1500 };
        assert_eq!(err.to_string(), "no response within 1500ms");
    }
}
