//! The error half of every operation call.

use thiserror::Error;

use super::ApiError;
use crate::response::ReadResponse;

/// Failure of one operation call, generic over the operation's outcome enum.
///
/// `E` is the per-operation enum produced by its reader: one variant per
/// declared error status plus a catch-all default. An undeclared 2xx is not
/// returned as data; it comes back as [`OperationError::UnexpectedSuccess`]
/// carrying the default wrapper so the caller can still inspect it.
#[derive(Debug, Error)]
pub enum OperationError<E>
where
    E: std::error::Error + 'static,
{
    /// The call never produced a response a reader could dispatch on.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered with a declared error status or an undeclared non-2xx one.
    #[error(transparent)]
    Response(E),

    /// The server answered 2xx with a code the operation does not declare.
    #[error(
        "unexpected success response for {operation}: content available as default response in error"
    )]
    UnexpectedSuccess {
        /// Operation id.
        operation: &'static str,
        /// The response, held in the outcome's default variant.
        response: E,
    },
}

impl<E> OperationError<E>
where
    E: ReadResponse + std::error::Error + 'static,
{
    /// HTTP status of the response, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(_) => None,
            Self::Response(e) | Self::UnexpectedSuccess { response: e, .. } => Some(e.code()),
        }
    }

    /// The typed outcome, if the call got that far.
    pub fn response(&self) -> Option<&E> {
        match self {
            Self::Api(_) => None,
            Self::Response(e) | Self::UnexpectedSuccess { response: e, .. } => Some(e),
        }
    }

    /// Returns `true` for an undeclared 2xx.
    pub fn is_unexpected_success(&self) -> bool {
        matches!(self, Self::UnexpectedSuccess { .. })
    }
}
