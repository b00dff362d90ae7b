//! Azure virtual machines for self-managed clusters.

use serde::{Deserialize, Serialize};

/// A VM size offered in a location.
///
/// ## Example
///
/// ```json
/// {
///   "name": "Standard_NC6",
///   "numberOfCores": 6,
///   "numberOfGPUs": 1,
///   "osDiskSizeInMB": 1047552,
///   "resourceDiskSizeInMB": 344064,
///   "memoryInMB": 57344,
///   "maxDataDiskCount": 24,
///   "acceleratedNetworkingEnabled": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureSize {
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

    #[serde(default)]
    pub accelerated_networking_enabled: bool,
}

/// Availability zones of a VM SKU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureAvailabilityZones {
    #[serde(default)]
    pub zones: Vec<String>,
}
