//! Platform administrators.

use kubermatic_runtime::{CompositeError, Formats, Validate};
use serde::{Deserialize, Serialize};

use crate::common::require_non_empty;

/// A user's administrator flag.
///
/// Returned by the admin listing and sent to grant or revoke rights.
///
/// ## Example
///
/// ```json
/// {
///   "email": "jane@example.com",
///   "isAdmin": true,
///   "name": "Jane Doe"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Email address identifying the user.
    pub email: String,

    /// Whether the user holds administrator rights.
    #[serde(default)]
    pub is_admin: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Admin {
    pub fn new(email: impl Into<String>, is_admin: bool) -> Self {
        Self {
            email: email.into(),
            is_admin,
            ..Default::default()
        }
    }
}

impl Validate for Admin {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        if let Err(err) = require_non_empty("email", &self.email) {
            errors.push(err);
        } else {
            errors.record(formats.check_format("email", "email", &self.email));
        }
        errors.into_result()
    }
}
