//! Credential errors.

use thiserror::Error;

/// Errors raised while an auth writer decorates a request.
///
/// Rejections by the server are not auth errors; a 401 or 403 is a typed
/// outcome of the operation that was called.
#[derive(Debug, Error)]
pub enum AuthError {
    /// None of the environment variables holding a credential were set.
    #[error("Missing credential: set one of {env_vars}")]
    MissingCredential {
        /// Comma separated variable names that were consulted.
        env_vars: String,
    },

    /// The credential contains characters that cannot travel in a header.
    #[error("Invalid credential format")]
    InvalidKeyFormat,

    /// The header name configured for an API key is not a valid header name.
    #[error("Invalid auth header name: {name}")]
    InvalidHeader {
        /// The rejected header name.
        name: String,
    },
}

impl AuthError {
    /// Builds a [`AuthError::MissingCredential`] from the variables that were tried.
    pub fn missing(env_vars: &[&str]) -> Self {
        Self::MissingCredential {
            env_vars: env_vars.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_variables() {
        let err = AuthError::missing(&["KUBERMATIC_TOKEN", "KKP_TOKEN"]);
        assert_eq!(
            err.to_string(),
            "Missing credential: set one of KUBERMATIC_TOKEN, KKP_TOKEN"
        );
    }

    #[test]
    fn test_invalid_header_display() {
        let err = AuthError::InvalidHeader {
            name: "bad header".to_string(),
        };
        assert!(err.to_string().contains("bad header"));
    }
}
