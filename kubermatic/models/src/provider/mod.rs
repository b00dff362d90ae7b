//! Cloud provider listings used when creating or importing clusters.
//!
//! These are read-only shapes returned by the provider endpoints. Each is
//! named after what the provider itself calls the resource.

pub mod aks;
pub mod alibaba;
pub mod anexia;
pub mod azure;
pub mod eks;
pub mod gcp;
pub mod gke;

pub use aks::{AksCluster, AksLocation, AksVmSize, AzureResourceGroup};
pub use alibaba::{AlibabaInstanceType, AlibabaZone};
pub use anexia::{AnexiaTemplate, AnexiaVlan};
pub use azure::{AzureAvailabilityZones, AzureSize};
pub use eks::{EksCluster, EksSecurityGroup, EksSubnet, EksVpc};
pub use gcp::{GcpDiskType, GcpMachineSize, GcpNetwork, GcpSubnetwork, GcpZone};
pub use gke::{GkeCluster, GkeDiskType, GkeImage, GkeZone};
