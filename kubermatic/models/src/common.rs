//! Types shared by several resources.

use kubermatic_runtime::{FieldError, ParamLocation};
use serde::{Deserialize, Serialize};

// =============================================================================
// Error Envelope
// =============================================================================

/// Error body returned by the API for failed calls.
///
/// ## Example
///
/// ```json
/// {
///   "error": {
///     "code": 409,
///     "message": "IPAMPool \"pool-1\" already exists"
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The error itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

impl ErrorResponse {
    /// The server's message, if it sent one.
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

/// Code, message and optional details of an API error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// HTTP status code repeated by the server.
    pub code: i64,

    pub message: String,

    /// Additional error messages, e.g. one per failed validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

// =============================================================================
// Membership
// =============================================================================

/// A project and the group a user or service account holds in it.
///
/// ## Example
///
/// ```json
/// {"id": "xk2lm8", "group": "owners-xk2lm8"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectGroup {
    pub id: String,

    pub group: String,
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::required(field, ParamLocation::Body))
    } else {
        Ok(())
    }
}
