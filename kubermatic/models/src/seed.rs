//! Seed clusters and their datacenters.

use std::collections::BTreeMap;

use kubermatic_runtime::{CompositeError, Formats, Validate};
use serde::{Deserialize, Serialize};

use crate::common::require_non_empty;

// =============================================================================
// Seed
// =============================================================================

/// A seed cluster hosting user cluster control planes.
///
/// ## Example
///
/// ```json
/// {
///   "name": "europe-west",
///   "spec": {
///     "country": "DE",
///     "location": "Hamburg",
///     "kubeconfig": {"name": "kubeconfig-europe-west", "namespace": "kubermatic"},
///     "datacenters": {
///       "hamburg-1": {"country": "DE", "location": "Hamburg", "provider": "aws"}
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    pub name: String,

    #[serde(default)]
    pub spec: SeedSpec,
}

impl Validate for Seed {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        errors.record(require_non_empty("name", &self.name));
        errors.absorb("spec", self.spec.validate(formats));
        errors.into_result()
    }
}

/// Location and datacenters of a seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSpec {
    /// ISO 3166 country code of the seed's location.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,

    /// Human readable location, e.g. a city name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,

    /// Reference to the secret holding the seed's kubeconfig.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<ObjectReference>,

    /// Datacenters served by this seed, keyed by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub datacenters: BTreeMap<String, Datacenter>,

    #[serde(
        rename = "seed_dns_overwrite",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub seed_dns_overwrite: Option<String>,

    /// How user cluster API servers are exposed: `NodePort`, `LoadBalancer` or `Tunneling`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose_strategy: Option<String>,

    /// Proxy, monitoring and backup settings not modelled here.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Validate for SeedSpec {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        if let Some(kubeconfig) = &self.kubeconfig {
            errors.absorb("kubeconfig", kubeconfig.validate(formats));
        }
        errors.absorb("datacenters", self.datacenters.validate(formats));
        errors.into_result()
    }
}

/// A named reference to another Kubernetes object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    pub name: String,
}

impl Validate for ObjectReference {
    fn validate(&self, _formats: &Formats) -> Result<(), CompositeError> {
        require_non_empty("name", &self.name).map_err(CompositeError::from)
    }
}

/// A datacenter in which user clusters can be placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datacenter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,

    /// Name of the cloud provider, e.g. `aws` or `openstack`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider: String,

    /// Email domains allowed to use this datacenter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_email_domains: Vec<String>,

    #[serde(default)]
    pub enforce_audit_logging: bool,

    /// Provider specific settings.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub spec: serde_json::Value,
}

impl Validate for Datacenter {
    fn validate(&self, _formats: &Formats) -> Result<(), CompositeError> {
        require_non_empty("provider", &self.provider).map_err(CompositeError::from)
    }
}

// =============================================================================
// Create Request
// =============================================================================

/// Body of the seed creation call.
///
/// ## Example
///
/// ```json
/// {
///   "name": "europe-west",
///   "spec": {
///     "country": "DE",
///     "location": "Hamburg",
///     "kubeconfig": "YXBpVmVyc2lvbjogdjEK..."
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSeedBody {
    pub name: String,

    #[serde(default)]
    pub spec: CreateSeedSpec,
}

impl CreateSeedBody {
    pub fn new(name: impl Into<String>, kubeconfig: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: CreateSeedSpec {
                kubeconfig: kubeconfig.into(),
                ..Default::default()
            },
        }
    }
}

impl Validate for CreateSeedBody {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        errors.record(require_non_empty("name", &self.name));
        errors.absorb("spec", self.spec.validate(formats));
        errors.into_result()
    }
}

/// Settings of a seed being registered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeedSpec {
    /// The seed's kubeconfig, base64 encoded.
    pub kubeconfig: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose_strategy: Option<String>,

    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub etcd_backup_restore: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mla: Option<SeedMla>,
}

impl Validate for CreateSeedSpec {
    fn validate(&self, _formats: &Formats) -> Result<(), CompositeError> {
        require_non_empty("kubeconfig", &self.kubeconfig).map_err(CompositeError::from)
    }
}

// =============================================================================
// Seed Settings
// =============================================================================

/// Seed-level settings visible to regular users.
///
/// ## Example
///
/// ```json
/// {
///   "mla": {"user_cluster_mla_enabled": true},
///   "metering": {"enabled": false},
///   "seedDNSOverwrite": "europe.kkp.example.com"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSettings {
    #[serde(default)]
    pub mla: SeedMla,

    #[serde(default)]
    pub metering: MeteringConfiguration,

    #[serde(
        rename = "seedDNSOverwrite",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub seed_dns_overwrite: String,
}

/// Whether the user cluster MLA stack is enabled in a seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedMla {
    #[serde(default)]
    pub user_cluster_mla_enabled: bool,
}

/// Metering configuration of a seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteringConfiguration {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_class_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_size: String,
}
