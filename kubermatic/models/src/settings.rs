//! Global platform settings and per-user preferences.
//!
//! Both are read in full and changed with JSON merge patches, so every
//! field is optional on the wire.

use serde::{Deserialize, Serialize};

// =============================================================================
// Global Settings
// =============================================================================

/// Platform-wide settings managed by administrators.
///
/// ## Example
///
/// ```json
/// {
///   "customLinks": [{"label": "Docs", "url": "https://docs.example.com", "location": "footer"}],
///   "defaultNodeCount": 3,
///   "displayAPIDocs": true,
///   "userProjectsLimit": 10,
///   "restrictProjectCreation": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_links: Vec<CustomLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_options: Option<CleanupOptions>,

    /// Node count proposed when creating a machine deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_node_count: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_demo_info: Option<bool>,

    #[serde(
        rename = "displayAPIDocs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_api_docs: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_terms_of_service: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_dashboard: Option<bool>,

    #[serde(
        rename = "enableOIDCKubeconfig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_oidc_kubeconfig: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_external_cluster_import: Option<bool>,

    /// Maximum number of projects a regular user may own; 0 means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_projects_limit: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_project_creation: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opa_options: Option<OpaOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mla_options: Option<MlaOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mla_alertmanager_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mla_grafana_prefix: Option<String>,

    #[serde(
        rename = "machineDeploymentVMResourceQuota",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub machine_deployment_vm_resource_quota: Option<MachineDeploymentVmResourceQuota>,
}

/// A link shown in the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLink {
    pub label: String,

    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,

    /// Where the link is placed, e.g. `default`, `footer` or `HelpPanel`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
}

/// Cluster cleanup behaviour on deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupOptions {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub enforced: bool,
}

/// Open Policy Agent integration defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaOptions {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub enforced: bool,
}

/// Monitoring, logging and alerting defaults for user clusters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlaOptions {
    #[serde(default)]
    pub logging_enabled: bool,

    #[serde(default)]
    pub logging_enforced: bool,

    #[serde(default)]
    pub monitoring_enabled: bool,

    #[serde(default)]
    pub monitoring_enforced: bool,
}

/// Bounds for the machine sizes offered in the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDeploymentVmResourceQuota {
    #[serde(rename = "minCPU", default)]
    pub min_cpu: i32,

    #[serde(rename = "maxCPU", default)]
    pub max_cpu: i32,

    #[serde(rename = "minRAM", default)]
    pub min_ram: i32,

    #[serde(rename = "maxRAM", default)]
    pub max_ram: i32,

    #[serde(rename = "enableGPU", default)]
    pub enable_gpu: bool,
}

// =============================================================================
// User Settings
// =============================================================================

/// Dashboard preferences of the current user.
///
/// ## Example
///
/// ```json
/// {
///   "selectedTheme": "dark",
///   "itemsPerPage": 20,
///   "collapseSidenav": false,
///   "selectedProjectId": "xk2lm8"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<i8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_project_table_view: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_sidenav: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_all_projects_for_admin: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_changelog_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_clusters_view: Option<bool>,
}
