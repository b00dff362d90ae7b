//! Projects.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kubermatic_runtime::{CompositeError, Formats, Validate};
use serde::{Deserialize, Serialize};

use crate::common::require_non_empty;
use crate::user::User;

/// A project grouping clusters, members and service accounts.
///
/// ## Example
///
/// ```json
/// {
///   "id": "xk2lm8",
///   "name": "payments",
///   "creationTimestamp": "2024-03-01T09:30:00Z",
///   "status": "Active",
///   "labels": {"team": "billing"},
///   "owners": [{"name": "Jane Doe", "email": "jane@example.com"}],
///   "clustersNumber": 2
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,

    /// Lifecycle phase: `Active`, `Inactive` or `Terminating`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<User>,

    #[serde(default)]
    pub clusters_number: i64,
}

impl Validate for Project {
    fn validate(&self, _formats: &Formats) -> Result<(), CompositeError> {
        require_non_empty("name", &self.name).map_err(CompositeError::from)
    }
}

/// Body of the project creation call.
///
/// ## Example
///
/// ```json
/// {"name": "payments", "labels": {"team": "billing"}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBody {
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl ProjectBody {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}

impl Validate for ProjectBody {
    fn validate(&self, _formats: &Formats) -> Result<(), CompositeError> {
        require_non_empty("name", &self.name).map_err(CompositeError::from)
    }
}
