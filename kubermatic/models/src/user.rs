//! Users and their project memberships.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kubermatic_runtime::{CompositeError, Formats, Validate};
use serde::{Deserialize, Serialize};

use crate::common::{ProjectGroup, require_non_empty};
use crate::settings::UserSettings;

/// A platform user.
///
/// The same shape is returned for the current user and sent when adding a
/// user to a project, in which case `email` and `projects` are what matters.
///
/// ## Example
///
/// ```json
/// {
///   "id": "3f1b0c",
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "creationTimestamp": "2024-03-01T09:30:00Z",
///   "isAdmin": false,
///   "projects": [{"id": "xk2lm8", "group": "editors"}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,

    pub email: String,

    #[serde(default)]
    pub is_admin: bool,

    /// Projects the user belongs to and the group held in each.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectGroup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<UserSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

impl User {
    /// A membership request for `email` in `group` of `project_id`.
    pub fn member(
        email: impl Into<String>,
        project_id: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            projects: vec![ProjectGroup {
                id: project_id.into(),
                group: group.into(),
            }],
            ..Default::default()
        }
    }
}

impl Validate for User {
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
