//! Amazon Elastic Kubernetes Service.

use serde::{Deserialize, Serialize};

/// ## Example
///
/// ```json
/// {"id": "vpc-0a1b2c3d", "default": true}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EksVpc {
    pub id: String,

    #[serde(rename = "default", default)]
    pub is_default: bool,
}

/// ## Example
///
/// ```json
/// {
///   "subnetId": "subnet-4e5f6a7b",
///   "vpcId": "vpc-0a1b2c3d",
///   "availabilityZone": "eu-central-1a",
///   "default": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EksSubnet {
    pub subnet_id: String,

    #[serde(default)]
    pub vpc_id: String,

    #[serde(default)]
    pub availability_zone: String,

    #[serde(rename = "default", default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EksSecurityGroup {
    pub group_id: String,

    #[serde(default)]
    pub vpc_id: String,
}

/// An EKS cluster visible with the given credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EksCluster {
    pub name: String,

    #[serde(default)]
    pub region: String,

    #[serde(rename = "imported", default)]
    pub is_imported: bool,
}
