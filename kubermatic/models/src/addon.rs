//! Cluster addons.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An addon installed in a user cluster.
///
/// ## Example
///
/// ```json
/// {
///   "id": "node-exporter",
///   "name": "node-exporter",
///   "creationTimestamp": "2024-03-01T09:30:00Z",
///   "spec": {
///     "variables": {"scrapeInterval": "30s"},
///     "isDefault": false,
///     "continuouslyReconcile": true
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub spec: AddonSpec,
}

impl Addon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Installation settings of an addon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonSpec {
    /// Free-form values rendered into the addon manifests.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub variables: serde_json::Value,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default)]
    pub continuously_reconcile: bool,
}
