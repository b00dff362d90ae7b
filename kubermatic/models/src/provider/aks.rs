//! Azure Kubernetes Service.

use serde::{Deserialize, Serialize};

/// A VM size available for AKS node pools.
///
/// ## Example
///
/// ```json
/// {
///   "name": "Standard_D2s_v3",
///   "numberOfCores": 2,
///   "numberOfGPUs": 0,
///   "osDiskSizeInMB": 1047552,
///   "resourceDiskSizeInMB": 16384,
///   "memoryInMB": 8192,
///   "maxDataDiskCount": 4
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AksVmSize {
    pub name: String,

    #[serde(default)]
    pub number_of_cores: i32,

    #[serde(rename = "numberOfGPUs", default)]
    pub number_of_gpus: i32,

    #[serde(rename = "osDiskSizeInMB", default)]
    pub os_disk_size_in_mb: i32,

    #[serde(rename = "resourceDiskSizeInMB", default)]
    pub resource_disk_size_in_mb: i32,

    #[serde(rename = "memoryInMB", default)]
    pub memory_in_mb: i32,

    #[serde(default)]
    pub max_data_disk_count: i32,
}

/// An Azure region offering AKS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AksLocation {
    pub name: String,

    /// Region category, e.g. `Recommended` or `Other`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region_category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureResourceGroup {
    pub name: String,
}

/// An AKS cluster visible with the given credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AksCluster {
    pub name: String,

    #[serde(default)]
    pub resource_group: String,

    /// Whether the cluster is already imported into the project.
    #[serde(rename = "imported", default)]
    pub is_imported: bool,
}
