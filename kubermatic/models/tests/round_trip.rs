use std::collections::BTreeMap;
use std::fmt::Debug;

use chrono::{DateTime, Utc};
use kubermatic_models::{
    Addon, AddonSpec, Admin, CreateSeedBody, Datacenter, EtcdBackupConfigBody, Project,
    ProjectBody, ProjectGroup, Seed, SeedMla, ServiceAccountBody, ServiceAccountTokenBody, User,
    UserSettings,
};
use proptest::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

fn round_trip<T>(model: &T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let bytes = serde_json::to_vec(model).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_round_trip<T>(model: T)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    assert_eq!(round_trip(&model), model);
}

fn at(timestamp: &str) -> Option<DateTime<Utc>> {
    Some(timestamp.parse().unwrap())
}

fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn jane() -> User {
    User {
        id: "jane-id".to_string(),
        name: "Jane".to_string(),
        annotations: labels(&[("kubermatic.io/origin", "oidc")]),
        creation_timestamp: at("2024-03-01T09:30:00Z"),
        email: "jane@example.com".to_string(),
        is_admin: true,
        projects: vec![ProjectGroup {
            id: "xk2lm8".to_string(),
            group: "owners-xk2lm8".to_string(),
        }],
        settings: Some(UserSettings {
            selected_theme: Some("dark".to_string()),
            items_per_page: Some(20),
            collapse_sidenav: Some(false),
            ..Default::default()
        }),
        last_seen: at("2024-03-02T18:05:12.250Z"),
        ..Default::default()
    }
}

// =============================================================================
// Fixed cases
// =============================================================================

#[test]
fn test_admin_round_trip() {
    assert_round_trip(Admin::new("jane@example.com", true));
    assert_round_trip(Admin {
        name: "Jane".to_string(),
        ..Admin::new("jane@example.com", false)
    });
}

#[test]
fn test_user_round_trip() {
    assert_round_trip(jane());
    assert_round_trip(User::member("bob@acme.com", "xk2lm8", "editors"));
}

#[test]
fn test_project_round_trip() {
    assert_round_trip(ProjectBody::new("payments").with_label("team", "billing"));
    assert_round_trip(Project {
        id: "xk2lm8".to_string(),
        name: "payments".to_string(),
        creation_timestamp: at("2024-03-01T09:30:00Z"),
        deletion_timestamp: at("2024-04-01T00:00:00Z"),
        status: "Terminating".to_string(),
        labels: labels(&[("team", "billing")]),
        owners: vec![jane()],
        clusters_number: 3,
        ..Default::default()
    });
}

#[test]
fn test_service_account_bodies_round_trip() {
    assert_round_trip(ServiceAccountBody::new("ci", "projectmanagers"));
    assert_round_trip(ServiceAccountTokenBody::new("pipeline"));
}

#[test]
fn test_etcd_backup_config_body_round_trip() {
    assert_round_trip(EtcdBackupConfigBody::new("once", "c7n4qk9m2z"));
    let mut nightly =
        EtcdBackupConfigBody::new("nightly", "c7n4qk9m2z").with_schedule("0 2 * * *", 0);
    nightly.spec.destination = "s3".to_string();
    assert_round_trip(nightly);
}

#[test]
fn test_create_seed_body_round_trip() {
    assert_round_trip(CreateSeedBody::new("europe-west", "YXBpVmVyc2lvbjogdjEK"));

    let mut body = CreateSeedBody::new("europe-west", "YXBpVmVyc2lvbjogdjEK");
    body.spec.country = "DE".to_string();
    body.spec.expose_strategy = Some("Tunneling".to_string());
    body.spec.etcd_backup_restore = json!({"defaultDestination": "s3"});
    body.spec.mla = Some(SeedMla {
        user_cluster_mla_enabled: true,
    });
    assert_round_trip(body);
}

#[test]
fn test_seed_round_trip() {
    let mut seed = Seed {
        name: "europe-west".to_string(),
        ..Default::default()
    };
    seed.spec.country = "DE".to_string();
    seed.spec.seed_dns_overwrite = Some("eu".to_string());
    seed.spec.datacenters.insert(
        "hamburg-1".to_string(),
        Datacenter {
            country: "DE".to_string(),
            provider: "openstack".to_string(),
            required_email_domains: vec!["example.com".to_string()],
            enforce_audit_logging: true,
            spec: json!({"openstack": {"region": "ham1"}}),
            ..Default::default()
        },
    );
    seed.spec.datacenters.insert(
        "bare".to_string(),
        Datacenter {
            provider: "aws".to_string(),
            ..Default::default()
        },
    );
    seed.spec
        .extra
        .insert("proxy_settings".to_string(), json!({"http_proxy": null}));
    assert_round_trip(seed);
}

#[test]
fn test_addon_round_trip() {
    let mut addon = Addon::new("cluster-autoscaler");
    addon.id = "cluster-autoscaler".to_string();
    addon.creation_timestamp = at("2024-03-01T09:30:00Z");
    addon.spec = AddonSpec {
        variables: json!({"minReplicas": 1, "tags": ["a", "b"]}),
        is_default: true,
        continuously_reconcile: true,
    };
    assert_round_trip(addon);
    assert_round_trip(Addon::new("dashboard"));
}

#[test]
fn test_unset_free_form_values_are_omitted() {
    let addon = Addon::new("dashboard");
    assert_eq!(addon.spec.variables, Value::Null);
    let json = serde_json::to_value(&addon).unwrap();
    assert!(json["spec"].get("variables").is_none());

    let datacenter = Datacenter {
        provider: "aws".to_string(),
        ..Default::default()
    };
    let json = serde_json::to_value(&datacenter).unwrap();
    assert_eq!(json, json!({"provider": "aws", "enforceAuditLogging": false}));
}

#[test]
fn test_explicit_null_reads_as_unset() {
    let spec: AddonSpec = serde_json::from_value(json!({"variables": null})).unwrap();
    assert_eq!(spec, AddonSpec::default());
}

// =============================================================================
// Generated cases
// =============================================================================

fn label_map() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z][a-z0-9./-]{0,20}", "\\PC{0,16}", 0..4)
}

proptest! {
    #[test]
    fn prop_admin_round_trips(email in "\\PC*", name in "\\PC*", is_admin in any::<bool>()) {
        let admin = Admin { email, is_admin, name };
        prop_assert_eq!(round_trip(&admin), admin);
    }

    #[test]
    fn prop_project_body_round_trips(name in "\\PC*", labels in label_map()) {
        let body = ProjectBody { name, labels };
        prop_assert_eq!(round_trip(&body), body);
    }

    #[test]
    fn prop_service_account_body_round_trips(name in "\\PC*", group in "[a-z]{0,16}") {
        let body = ServiceAccountBody { name, group };
        prop_assert_eq!(round_trip(&body), body);
    }

    #[test]
    fn prop_etcd_backup_body_round_trips(
        name in "\\PC*",
        cluster_id in "[a-z0-9]{0,10}",
        schedule in "\\PC{0,20}",
        keep in proptest::option::of(any::<i64>()),
    ) {
        let mut body = EtcdBackupConfigBody::new(name, cluster_id);
        body.spec.schedule = schedule;
        body.spec.keep = keep;
        prop_assert_eq!(round_trip(&body), body);
    }

    #[test]
    fn prop_addon_variables_round_trip(
        variables in prop::collection::btree_map("\\PC{1,8}", any::<i64>(), 0..6),
        is_default in any::<bool>(),
    ) {
        let mut addon = Addon::new("kubeflow");
        addon.spec.variables = json!(variables);
        addon.spec.is_default = is_default;
        prop_assert_eq!(round_trip(&addon), addon);
    }
}
