//! Project service accounts and their tokens.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kubermatic_runtime::{CompositeError, FieldError, Formats, ParamLocation, Validate};
use serde::{Deserialize, Serialize};

use crate::common::require_non_empty;

/// Groups a service account may be placed in.
pub const SERVICE_ACCOUNT_GROUPS: &[&str] = &["editors", "viewers", "projectmanagers"];

fn check_group(group: &str) -> Result<(), FieldError> {
    if SERVICE_ACCOUNT_GROUPS.contains(&group) {
        Ok(())
    } else {
        Err(FieldError::enum_mismatch(
            "group",
            ParamLocation::Body,
            group,
            SERVICE_ACCOUNT_GROUPS,
        ))
    }
}

// =============================================================================
// Service Accounts
// =============================================================================

/// A non-human project member authenticating with tokens.
///
/// ## Example
///
/// ```json
/// {
///   "id": "sa-7c4d2",
///   "name": "ci-deployer",
///   "creationTimestamp": "2024-03-01T09:30:00Z",
///   "group": "editors-xk2lm8",
///   "status": "Active"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccount {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,

    /// Group the account holds, suffixed with the project id by the server.
    #[serde(default)]
    pub group: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
}

/// Body of the service account creation call.
///
/// ## Example
///
/// ```json
/// {"name": "ci-deployer", "group": "editors"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccountBody {
    pub name: String,

    /// One of [`SERVICE_ACCOUNT_GROUPS`].
    pub group: String,
}

impl ServiceAccountBody {
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
        }
    }
}

impl Validate for ServiceAccountBody {
    fn validate(&self, _formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        errors.record(require_non_empty("name", &self.name));
        errors.record(check_group(&self.group));
        errors.into_result()
    }
}

// =============================================================================
// Tokens
// =============================================================================

/// A service account token as returned on creation or update.
///
/// Only these responses carry the secret itself.
///
/// ## Example
///
/// ```json
/// {
///   "id": "sa-token-91ab",
///   "name": "pipeline",
///   "expiry": "2027-03-01T09:30:00Z",
///   "token": "eyJhbGciOiJSUzI1NiIs..."
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountToken {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
}

/// A service account token without its secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicServiceAccountToken {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

impl Validate for PublicServiceAccountToken {
    fn validate(&self, _formats: &Formats) -> Result<(), CompositeError> {
        require_non_empty("name", &self.name).map_err(CompositeError::from)
    }
}

/// Body of the token creation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccountTokenBody {
    pub name: String,
}

impl ServiceAccountTokenBody {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for ServiceAccountTokenBody {
    fn validate(&self, _formats: &Formats) -> Result<(), CompositeError> {
        require_non_empty("name", &self.name).map_err(CompositeError::from)
    }
}
