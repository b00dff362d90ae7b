//! Top-level runtime error type.

use super::{AuthError, ClientError, CompositeError, ConfigError, ValidationError};
use thiserror::Error;

/// Every failure that happens outside a reader's status-code dispatch.
///
/// Parameter failures surface as [`ApiError::Params`] and are always raised
/// before the transport opens a connection.
///
/// ## Examples
///
/// ```rust,ignore
/// use kubermatic_runtime::ApiError;
///
/// fn describe(err: &ApiError) -> &'static str {
///     match err {
///         ApiError::Client(_) => "network",
///         ApiError::Validation(_) => "body",
///         ApiError::Auth(_) => "credentials",
///         ApiError::Config(_) => "configuration",
///         ApiError::Params(_) => "parameters",
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, timeout and connection failures.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A body could not be encoded or decoded.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Credentials were missing or malformed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The transport or operation descriptor is misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// One or more parameters failed to write to the request.
    #[error(transparent)]
    Params(#[from] CompositeError),
}

impl ApiError {
    /// Returns `true` when the failure happened before anything was sent.
    pub fn is_pre_flight(&self) -> bool {
        matches!(self, Self::Params(_) | Self::Auth(_) | Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldError, ParamLocation};

    #[test]
    fn test_from_client_error() {
        let api_err: ApiError = ClientError::Timeout { duration_ms: 250 }.into();
        assert!(matches!(api_err, ApiError::Client(_)));
        assert!(!api_err.is_pre_flight());
    }

    #[test]
    fn test_from_composite_error() {
        let mut composite = CompositeError::new();
        composite.push(FieldError::required("project_id", ParamLocation::Path));
        let api_err: ApiError = composite.into();
        assert!(api_err.is_pre_flight());
        assert!(api_err.to_string().contains("project_id in path is required"));
    }

    #[test]
    fn test_auth_display_is_transparent() {
        let err = ApiError::Auth(AuthError::InvalidKeyFormat);
        assert_eq!(err.to_string(), "Invalid credential format");
    }
}
