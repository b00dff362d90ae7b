use kubermatic_models::{
    Admin, CreateSeedBody, ErrorResponse, EtcdBackupConfig, EtcdBackupConfigBody, GlobalSettings,
    IpamPool, IpamPoolDatacenterSettings, Project, ProjectBody, PublicServiceAccountToken, Seed,
    ServiceAccountBody, ServiceAccountTokenBody, User,
};
use kubermatic_runtime::{FieldError, Formats, ParamLocation, Validate};
use serde_json::json;

fn names(errors: &kubermatic_runtime::CompositeError) -> Vec<&str> {
    errors.errors().iter().map(FieldError::name).collect()
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_error_response_from_server() {
    let body = r#"{"error":{"code":409,"message":"IPAMPool \"test-pool-1\" already exists"}}"#;
    let response: ErrorResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.message(), Some("IPAMPool \"test-pool-1\" already exists"));
    assert_eq!(response.error.unwrap().code, 409);
}

#[test]
fn test_project_with_owners_and_timestamps() {
    let project: Project = serde_json::from_value(json!({
        "id": "xk2lm8",
        "name": "payments",
        "creationTimestamp": "2024-03-01T09:30:00Z",
        "status": "Active",
        "owners": [{"name": "Jane", "email": "jane@example.com", "creationTimestamp": "2024-03-01T09:30:00Z"}],
        "clustersNumber": 2
    }))
    .unwrap();

    assert_eq!(project.owners[0].email, "jane@example.com");
    assert_eq!(project.clusters_number, 2);
    assert_eq!(
        project.creation_timestamp.unwrap().to_rfc3339(),
        "2024-03-01T09:30:00+00:00"
    );
}

#[test]
fn test_seed_keeps_unmodelled_fields() {
    let raw = json!({
        "name": "europe-west",
        "spec": {
            "country": "DE",
            "location": "Hamburg",
            "kubeconfig": {"name": "kubeconfig-europe-west", "namespace": "kubermatic"},
            "datacenters": {"hamburg-1": {"country": "DE", "location": "Hamburg", "provider": "aws", "enforceAuditLogging": false}},
            "proxy_settings": {"http_proxy": "http://proxy:3128"}
        }
    });
    let seed: Seed = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(seed.spec.datacenters["hamburg-1"].provider, "aws");
    assert!(seed.spec.extra.contains_key("proxy_settings"));
    assert_eq!(serde_json::to_value(&seed).unwrap(), raw);
}

#[test]
fn test_settings_patch_serializes_only_set_fields() {
    let patch = GlobalSettings {
        restrict_project_creation: Some(true),
        display_api_docs: Some(false),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({"displayAPIDocs": false, "restrictProjectCreation": true})
    );
}

#[test]
fn test_etcd_backup_config_status() {
    let config: EtcdBackupConfig = serde_json::from_value(json!({
        "id": "xk2lm8-nightly",
        "name": "nightly",
        "spec": {"clusterId": "c7n4qk9m2z", "schedule": "0 2 * * *", "keep": 7},
        "status": {
            "lastBackups": [{"backupName": "nightly-2024-03-01", "backupPhase": "Completed"}],
            "conditions": [{"type": "SchedulingActive", "status": "True"}]
        }
    }))
    .unwrap();

    assert_eq!(config.spec.keep, Some(7));
    assert_eq!(config.status.last_backups[0].backup_phase, "Completed");
    assert_eq!(config.status.conditions[0].kind, "SchedulingActive");
    assert!(!config.status.cleanup_running);
}

#[test]
fn test_body_model_round_trip() {
    let pool = IpamPool::new("pool-1")
        .with_datacenter("hamburg-1", IpamPoolDatacenterSettings::range("192.168.1.0/28", 8))
        .with_datacenter("frankfurt-1", IpamPoolDatacenterSettings::prefix("192.168.1.0/27", 28));
    let bytes = serde_json::to_vec(&pool).unwrap();
    let back: IpamPool = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(back, pool);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_admin_email_format() {
    let formats = Formats::default();
    assert!(Admin::new("jane@example.com", true).validate(&formats).is_ok());

    let errors = Admin::new("jane", true).validate(&formats).unwrap_err();
    assert!(matches!(
        &errors.errors()[0],
        FieldError::InvalidFormat { format, .. } if format == "email"
    ));

    let errors = Admin::default().validate(&formats).unwrap_err();
    assert_eq!(
        errors.errors()[0],
        FieldError::required("email", ParamLocation::Body)
    );
}

#[test]
fn test_user_membership_needs_valid_email() {
    let formats = Formats::default();
    assert!(User::member("bob@acme.com", "xk2lm8", "editors").validate(&formats).is_ok());
    assert!(User::member("bob", "xk2lm8", "editors").validate(&formats).is_err());
}

#[test]
fn test_create_seed_requires_name_and_kubeconfig() {
    let errors = CreateSeedBody::default()
        .validate(&Formats::default())
        .unwrap_err();
    assert_eq!(names(&errors), vec!["name", "spec.kubeconfig"]);

    assert!(CreateSeedBody::new("europe-west", "YXBpVmVyc2lvbjogdjEK")
        .validate(&Formats::default())
        .is_ok());
}

#[test]
fn test_seed_reports_nested_datacenter() {
    let seed: Seed = serde_json::from_value(json!({
        "name": "europe-west",
        "spec": {"datacenters": {"hamburg-1": {"country": "DE"}}}
    }))
    .unwrap();
    let errors = seed.validate(&Formats::default()).unwrap_err();
    assert_eq!(names(&errors), vec!["spec.datacenters.hamburg-1.provider"]);
}

#[test]
fn test_ipam_pool_valid() {
    let pool = IpamPool::new("pool-1")
        .with_datacenter("hamburg-1", IpamPoolDatacenterSettings::range("192.168.1.0/28", 8))
        .with_datacenter("frankfurt-1", IpamPoolDatacenterSettings::prefix("192.168.1.0/27", 28))
        .with_datacenter("berlin-1", IpamPoolDatacenterSettings::prefix("fd00::/64", 80));
    assert!(pool.validate(&Formats::default()).is_ok());
}

#[test]
fn test_ipam_pool_requires_datacenters() {
    let errors = IpamPool::default().validate(&Formats::default()).unwrap_err();
    assert_eq!(names(&errors), vec!["name", "datacenters"]);
}

#[test]
fn test_ipam_pool_allocation_rules() {
    let formats = Formats::default();
    let pool = IpamPool::new("pool-1")
        .with_datacenter("a", IpamPoolDatacenterSettings::default())
        .with_datacenter("b", IpamPoolDatacenterSettings::range("192.168.1.0/28", 0))
        .with_datacenter("c", IpamPoolDatacenterSettings::prefix("192.168.1.0/27", 0))
        .with_datacenter("d", IpamPoolDatacenterSettings::prefix("192.168.1.0/27", 26))
        .with_datacenter("e", IpamPoolDatacenterSettings::prefix("192.168.1.0/27", 33))
        .with_datacenter("f", IpamPoolDatacenterSettings::range("192.168.1.0", 8));

    let errors = pool.validate(&formats).unwrap_err();
    assert_eq!(
        names(&errors),
        vec![
            "datacenters.a.poolCidr",
            "datacenters.a.type",
            "datacenters.b.allocationRange",
            "datacenters.c.allocationPrefix",
            "datacenters.d.allocationPrefix",
            "datacenters.e.allocationPrefix",
            "datacenters.f.poolCidr",
        ]
    );
    assert!(errors.to_string().contains("must be between 27 and 32, got 26"));
}

#[test]
fn test_ipam_pool_rejects_unknown_type_and_bad_exclusions() {
    let mut prefix = IpamPoolDatacenterSettings::prefix("10.0.0.0/16", 24);
    prefix.exclude_prefixes = vec!["10.0.1.0/24".to_string(), "10.0.2.0".to_string()];
    let mut bogus = IpamPoolDatacenterSettings::range("10.0.0.0/16", 8);
    bogus.kind = "block".to_string();

    let errors = IpamPool::new("pool-1")
        .with_datacenter("a", prefix)
        .with_datacenter("b", bogus)
        .validate(&Formats::default())
        .unwrap_err();

    assert_eq!(
        names(&errors),
        vec!["datacenters.a.excludePrefixes.1", "datacenters.b.type"]
    );
    assert!(matches!(&errors.errors()[1], FieldError::EnumMismatch { value, .. } if value == "block"));
}

#[test]
fn test_etcd_backup_config_body() {
    let formats = Formats::default();
    assert!(EtcdBackupConfigBody::new("nightly", "c7n4qk9m2z")
        .with_schedule("0 2 * * *", 7)
        .validate(&formats)
        .is_ok());

    let errors = EtcdBackupConfigBody::new("nightly", "")
        .with_schedule("0 2 * * *", -1)
        .validate(&formats)
        .unwrap_err();
    assert_eq!(names(&errors), vec!["spec.clusterId", "spec.keep"]);
}

#[test]
fn test_project_body_name() {
    let formats = Formats::default();
    assert!(ProjectBody::new("payments").with_label("team", "billing").validate(&formats).is_ok());
    assert!(ProjectBody::new("  ").validate(&formats).is_err());
}

#[test]
fn test_service_account_group() {
    let formats = Formats::default();
    assert!(ServiceAccountBody::new("ci", "projectmanagers").validate(&formats).is_ok());

    let errors = ServiceAccountBody::new("", "owners").validate(&formats).unwrap_err();
    assert_eq!(names(&errors), vec!["name", "group"]);
    assert!(errors.errors()[1].to_string().contains("should be one of"));
}

#[test]
fn test_token_bodies_need_names() {
    let formats = Formats::default();
    assert!(ServiceAccountTokenBody::new("pipeline").validate(&formats).is_ok());
    assert!(ServiceAccountTokenBody::default().validate(&formats).is_err());
    assert!(PublicServiceAccountToken::default().validate(&formats).is_err());
}
