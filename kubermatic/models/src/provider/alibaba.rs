//! Alibaba Cloud.

use serde::{Deserialize, Serialize};

/// ## Example
///
/// ```json
/// {"id": "ecs.g6.large", "cpuCoreCount": 2, "gpuCoreCount": 0, "memorySize": 8}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlibabaInstanceType {
    pub id: String,

    #[serde(default)]
    pub cpu_core_count: i64,

    #[serde(default)]
    pub gpu_core_count: i64,

    /// Memory in GiB.
    #[serde(default)]
    pub memory_size: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlibabaZone {
    pub id: String,
}
