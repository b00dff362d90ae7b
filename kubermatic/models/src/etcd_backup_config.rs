//! Scheduled etcd backups of user clusters.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kubermatic_runtime::{CompositeError, FieldError, Formats, ParamLocation, Validate};
use serde::{Deserialize, Serialize};

use crate::common::require_non_empty;

/// Backup configurations of one cluster, as grouped by the project listing.
pub type EtcdBackupConfigList = Vec<EtcdBackupConfig>;

// =============================================================================
// Backup Config
// =============================================================================

/// A backup schedule for a cluster's etcd.
///
/// ## Example
///
/// ```json
/// {
///   "id": "xk2lm8-nightly",
///   "name": "nightly",
///   "spec": {
///     "clusterId": "c7n4qk9m2z",
///     "schedule": "0 2 * * *",
///     "keep": 7,
///     "destination": "s3"
///   },
///   "status": {"cleanupRunning": false}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtcdBackupConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub spec: EtcdBackupConfigSpec,

    #[serde(default)]
    pub status: EtcdBackupConfigStatus,
}

/// What to back up, when, and where to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtcdBackupConfigSpec {
    /// Id of the cluster being backed up.
    pub cluster_id: String,

    /// Cron expression. Without one the backup runs once, immediately.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schedule: String,

    /// Backups kept before the oldest is deleted. Only used with a schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep: Option<i64>,

    /// Destination name configured in the seed's backup settings.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub destination: String,
}

impl Validate for EtcdBackupConfigSpec {
    fn validate(&self, _formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        errors.record(require_non_empty("clusterId", &self.cluster_id));
        if let Some(keep) = self.keep.filter(|keep| *keep < 0) {
            errors.push(FieldError::invalid(
                "keep",
                ParamLocation::Body,
                format!("must be greater than or equal to 0, got {keep}"),
            ));
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtcdBackupConfigStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub last_backups: Vec<BackupStatus>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<EtcdBackupConfigCondition>,

    #[serde(default)]
    pub cleanup_running: bool,
}

/// Progress of one backup and of its deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub backup_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub job_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_finished_time: Option<DateTime<Utc>>,

    /// `Running`, `Completed`, `Failed` or `Unknown`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub backup_phase: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub backup_message: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delete_job_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_finished_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delete_phase: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delete_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtcdBackupConfigCondition {
    #[serde(rename = "type")]
    pub kind: String,

    /// `True`, `False` or `Unknown`.
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_heartbeat_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

// =============================================================================
// Create Request
// =============================================================================

/// Body of the backup config creation call.
///
/// ## Example
///
/// ```json
/// {
///   "name": "nightly",
///   "spec": {"clusterId": "c7n4qk9m2z", "schedule": "0 2 * * *", "keep": 7}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtcdBackupConfigBody {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    pub spec: EtcdBackupConfigSpec,
}

impl EtcdBackupConfigBody {
    pub fn new(name: impl Into<String>, cluster_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: EtcdBackupConfigSpec {
                cluster_id: cluster_id.into(),
                ..Default::default()
            },
        }
    }

    pub fn with_schedule(mut self, schedule: impl Into<String>, keep: i64) -> Self {
        self.spec.schedule = schedule.into();
        self.spec.keep = Some(keep);
        self
    }
}

impl Validate for EtcdBackupConfigBody {
    fn validate(&self, formats: &Formats) -> Result<(), CompositeError> {
        let mut errors = CompositeError::new();
        errors.absorb("spec", self.spec.validate(formats));
        errors.into_result()
    }
}
