//! Request and response models of the Kubermatic REST API.
//!
//! Plain serde records grouped by resource. Wire names are camelCase,
//! optional fields are omitted when unset, and timestamps are
//! `chrono::DateTime<Utc>`. Every model decodes from an empty body to its
//! `Default`, which is how the API answers some successful calls.
//!
//! Request bodies with server-side constraints implement
//! [`kubermatic_runtime::Validate`] so callers can check them before sending:
//!
//! ```rust
//! use kubermatic_models::IpamPool;
//! use kubermatic_runtime::{Formats, Validate};
//!
//! let pool = IpamPool::new("pool-1");
//! let errors = pool.validate(&Formats::default()).unwrap_err();
//! assert_eq!(errors.errors()[0].name(), "datacenters");
//! ```

pub mod addon;
pub mod admin;
pub mod common;
pub mod etcd_backup_config;
pub mod ipam_pool;
pub mod project;
pub mod provider;
pub mod seed;
pub mod service_account;
pub mod settings;
pub mod user;

pub use addon::{Addon, AddonSpec};
pub use admin::Admin;
pub use common::{ErrorDetails, ErrorResponse, ProjectGroup};
pub use etcd_backup_config::{
    BackupStatus, EtcdBackupConfig, EtcdBackupConfigBody, EtcdBackupConfigCondition,
    EtcdBackupConfigList, EtcdBackupConfigSpec, EtcdBackupConfigStatus,
};
pub use ipam_pool::{IpamPool, IpamPoolDatacenterSettings};
pub use project::{Project, ProjectBody};
pub use provider::*;
pub use seed::{
    CreateSeedBody, CreateSeedSpec, Datacenter, MeteringConfiguration, ObjectReference, Seed,
    SeedMla, SeedSettings, SeedSpec,
};
pub use service_account::{
    PublicServiceAccountToken, ServiceAccount, ServiceAccountBody, ServiceAccountToken,
    ServiceAccountTokenBody,
};
pub use settings::{
    CleanupOptions, CustomLink, GlobalSettings, MachineDeploymentVmResourceQuota, MlaOptions,
    OpaOptions, UserSettings,
};
pub use user::User;
