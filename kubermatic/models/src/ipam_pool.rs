//! Multi-cluster IP address management pools.
//!
//! A pool hands out either address ranges or subnets per datacenter. The
//! rules below mirror what the server rejects, so a pool that validates
//! here is only refused for conflicts.

use std::collections::BTreeMap;

use ipnetwork::IpNetwork;
use kubermatic_runtime::{CompositeError, FieldError, Formats, ParamLocation, Validate};
use serde::{Deserialize, Serialize};

use crate::common::require_non_empty;

/// Allocation types a datacenter pool may use.
pub const ALLOCATION_TYPES: &[&str] = &["range", "prefix"];

/// An IPAM pool spanning one or more datacenters.
///
/// ## Example
///
/// ```json
/// {
///   "name": "pool-1",
///   "datacenters": {
///     "hamburg-1": {"type": "range", "poolCidr": "192.168.1.0/28", "allocationRange": 8},
///     "frankfurt-1": {"type": "prefix", "poolCidr": "192.168.1.0/27", "allocationPrefix": 28}
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpamPool {
    pub name: String,

    /// Per-datacenter settings keyed by datacenter name.
    #[serde(default)]
    pub datacenters: BTreeMap<String, IpamPoolDatacenterSettings>,
}

impl IpamPool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            datacenters: BTreeMap::new(),
        }
    }

    pub fn with_datacenter(
        mut self,
        datacenter: impl Into<String>,
        settings: IpamPoolDatacenterSettings,
    ) -> Self {
        self.datacenters.insert(datacenter.into(), settings);
        self
    }
}

impl Validate for IpamPool {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        errors.record(require_non_empty("name", &self.name));
        if self.datacenters.is_empty() {
            errors.push(FieldError::required("datacenters", ParamLocation::Body));
        }
        errors.absorb("datacenters", self.datacenters.validate(formats));
        errors.into_result()
    }
}

/// How one datacenter allocates from the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpamPoolDatacenterSettings {
    /// `range` or `prefix`.
    #[serde(rename = "type")]
    pub kind: String,

    pub pool_cidr: String,

    /// Subnet size handed to each cluster, for `prefix` pools.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub allocation_prefix: u32,

    /// Number of addresses handed to each cluster, for `range` pools.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub allocation_range: u32,

    /// Subnets never handed out, for `prefix` pools.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_prefixes: Vec<String>,

    /// Addresses or ranges never handed out, for `range` pools.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_ranges: Vec<String>,
}

impl IpamPoolDatacenterSettings {
    pub fn range(pool_cidr: impl Into<String>, allocation_range: u32) -> Self {
        Self {
            kind: "range".to_string(),
            pool_cidr: pool_cidr.into(),
            allocation_range,
            ..Default::default()
        }
    }

    pub fn prefix(pool_cidr: impl Into<String>, allocation_prefix: u32) -> Self {
        Self {
            kind: "prefix".to_string(),
            pool_cidr: pool_cidr.into(),
            allocation_prefix,
            ..Default::default()
        }
    }
}

impl Validate for IpamPoolDatacenterSettings {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();

        let cidr = match require_non_empty("poolCidr", &self.pool_cidr)
            .and_then(|()| formats.check_format("cidr", "poolCidr", &self.pool_cidr))
        {
            Ok(()) => Some(self.pool_cidr.as_str()),
            Err(err) => {
                errors.push(err);
                None
            }
        };

        match self.kind.as_str() {
            "" => errors.push(FieldError::required("type", ParamLocation::Body)),
            "range" => {
                if self.allocation_range == 0 {
                    errors.push(FieldError::required("allocationRange", ParamLocation::Body));
                }
            }
            "prefix" => {
                if self.allocation_prefix == 0 {
                    errors.push(FieldError::required(
                        "allocationPrefix",
                        ParamLocation::Body,
                    ));
                } else if let Some((pool_prefix, max_bits)) = cidr.and_then(prefix_bounds) {
                    if self.allocation_prefix < pool_prefix || self.allocation_prefix > max_bits {
                        errors.push(FieldError::invalid(
                            "allocationPrefix",
                            ParamLocation::Body,
                            format!(
                                "must be between {pool_prefix} and {max_bits}, got {}",
                                self.allocation_prefix
                            ),
                        ));
                    }
                }
                for (index, excluded) in self.exclude_prefixes.iter().enumerate() {
                    errors.record(formats.check_format(
                        "cidr",
                        &format!("excludePrefixes.{index}"),
                        excluded,
                    ));
                }
            }
            other => errors.push(FieldError::enum_mismatch(
                "type",
                ParamLocation::Body,
                other,
                ALLOCATION_TYPES,
            )),
        }

        errors.into_result()
    }
}

/// Prefix length of a CIDR and the address width of its family.
fn prefix_bounds(cidr: &str) -> Option<(u32, u32)> {
    if !cidr.contains('/') {
        return None;
    }
    let network: IpNetwork = cidr.parse().ok()?;
    let max_bits = if network.is_ipv4() { 32 } else { 128 };
    Some((u32::from(network.prefix()), max_bits))
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_bounds() {
        assert_eq!(prefix_bounds("192.168.1.0/27"), Some((27, 32)));
        assert_eq!(prefix_bounds("fd00::/64"), Some((64, 128)));
        assert_eq!(prefix_bounds("192.168.1.0"), None);
        assert_eq!(prefix_bounds("192.168.1.0/40"), None);
        assert_eq!(prefix_bounds("not-a-net/24"), None);
    }

    #[test]
    fn test_zero_allocations_are_omitted() {
        let json = serde_json::to_value(IpamPoolDatacenterSettings::range("10.0.0.0/24", 8)).unwrap();
        assert_eq!(json["allocationRange"], 8);
        assert!(json.get("allocationPrefix").is_none());
    }
}
