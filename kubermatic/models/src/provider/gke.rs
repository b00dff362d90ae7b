//! Google Kubernetes Engine.

use serde::{Deserialize, Serialize};

/// ## Example
///
/// ```json
/// {"name": "europe-west3-a", "default": false}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GkeZone {
    pub name: String,

    #[serde(rename = "default", default)]
    pub is_default: bool,
}

/// A node image type, e.g. `COS_CONTAINERD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GkeImage {
    pub name: String,

    #[serde(rename = "default", default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GkeDiskType {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A GKE cluster visible with the given service account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GkeCluster {
    pub name: String,

    #[serde(default)]
    pub zone: String,

    #[serde(rename = "imported", default)]
    pub is_imported: bool,
}
