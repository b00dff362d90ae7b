//! Google Compute Engine, for clusters KKP provisions itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcpZone {
    pub name: String,
}

/// `local-ssd` is never listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcpDiskType {
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// ## Example
///
/// ```json
/// {"name": "n1-standard-2", "description": "2 vCPUs, 7.5 GB RAM", "memory": 7680, "vcpus": 2}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcpMachineSize {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// In MiB.
    #[serde(default)]
    pub memory: i64,

    #[serde(default)]
    pub vcpus: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcpNetwork {
    #[serde(default)]
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub auto_create_subnetworks: bool,

    /// Self links of the network's subnetworks.
    #[serde(default)]
    pub subnetworks: Vec<String>,

    #[serde(default)]
    pub kind: String,

    /// `global/networks/<name>`, the form cluster specs expect.
    #[serde(default)]
    pub path: String,
}

/// ## Example
///
/// ```json
/// {
///   "id": 4371200000000000000,
///   "name": "default",
///   "network": "https://www.googleapis.com/compute/v1/projects/kkp/global/networks/default",
///   "ipCidrRange": "10.156.0.0/20",
///   "gatewayAddress": "10.156.0.1",
///   "region": "europe-west3",
///   "privateIpGoogleAccess": false,
///   "kind": "compute#subnetwork",
///   "path": "projects/kkp/regions/europe-west3/subnetworks/default",
///   "ipFamily": "IPv4"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcpSubnetwork {
    #[serde(default)]
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub network: String,

    #[serde(default)]
    pub ip_cidr_range: String,

    #[serde(default)]
    pub gateway_address: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub self_link: String,

    #[serde(default)]
    pub private_ip_google_access: bool,

    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub path: String,

    /// `IPv4`, `IPv4+IPv6`, or empty when unspecified.
    #[serde(default)]
    pub ip_family: String,
}
