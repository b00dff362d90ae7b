//! Facade operations driven against a mock Kubermatic API.

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use kubermatic_client::KubermaticApi;
use kubermatic_client::admin::{GetAdminsError, GetAdminsParams, ListSeedsParams};
use kubermatic_client::etcd_backup_config::ListProjectEtcdBackupConfigParams;
use kubermatic_client::ipam_pool::{CreateIpamPoolError, CreateIpamPoolParams, ListIpamPoolsParams};
use kubermatic_client::project::{
    CreateProjectParams, DeleteProjectError, DeleteProjectParams, GetProjectParams,
    ListProjectsParams, UpdateProjectError, UpdateProjectParams,
};
use kubermatic_client::providers::{
    ListEksSubnetsParams, ListGcpNetworksParams, ListGcpSizesNoCredentialsParams,
    ListGcpSubnetworksParams, ListGkeZonesParams,
};
use kubermatic_client::seed::ListSeedNamesParams;
use kubermatic_client::settings::PatchCurrentUserSettingsParams;
use kubermatic_models::{IpamPool, IpamPoolDatacenterSettings, Project, ProjectBody};
use kubermatic_runtime::{
    ApiError, BearerToken, BoxFuture, ClientOperation, ClientResponse, ClientTransport, Formats,
    OperationError, ReadResponse, TransportConfig,
};
use reqwest::header::HeaderMap;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> KubermaticApi {
    KubermaticApi::with_config(TransportConfig::from_url(&server.uri()).unwrap()).unwrap()
}

#[tokio::test]
async fn test_list_seeds_keeps_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/seeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "europe-west3", "spec": {"country": "DE"}},
            {"name": "asia-east1", "spec": {"country": "TW"}},
        ])))
        .mount(&server)
        .await;

    let seeds = api(&server)
        .admin()
        .list_seeds(ListSeedsParams::new(), None)
        .await
        .unwrap();
    let names: Vec<&str> = seeds.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["europe-west3", "asia-east1"]);
    assert_eq!(seeds[0].spec.country, "DE");
}

#[tokio::test]
async fn test_declared_forbidden_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/admins"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = api(&server)
        .admin()
        .get_admins(GetAdminsParams::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, OperationError::Response(GetAdminsError::Forbidden)));
    assert_eq!(err.status_code(), Some(403));
    assert_eq!(err.to_string(), "[403] getAdminsForbidden");
}

#[tokio::test]
async fn test_create_ipam_pool_conflict_carries_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/ipampools"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": {"code": 409, "message": "IPAMPool \"pool-1\" already exists"}
        })))
        .mount(&server)
        .await;

    let body = IpamPool::new("pool-1")
        .with_datacenter("dc-1", IpamPoolDatacenterSettings::range("10.0.0.0/16", 8));
    let err = api(&server)
        .ipam_pool()
        .create_ipam_pool(CreateIpamPoolParams::new().with_body(body), None)
        .await
        .unwrap_err();

    match err.response() {
        Some(CreateIpamPoolError::Conflict(payload)) => {
            assert_eq!(payload.message(), Some("IPAMPool \"pool-1\" already exists"));
        }
        other => panic!("expected a conflict, got {other:?}"),
    }
    assert_eq!(err.status_code(), Some(409));
}

#[tokio::test]
async fn test_create_ipam_pool_ignores_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/ipampools"))
        .and(body_partial_json(json!({"name": "pool-1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let body = IpamPool::new("pool-1")
        .with_datacenter("dc-1", IpamPoolDatacenterSettings::prefix("10.0.0.0/16", 24));
    api(&server)
        .ipam_pool()
        .create_ipam_pool(CreateIpamPoolParams::new().with_body(body), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_project_server_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/projects/xk2lm8"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "etcd unavailable", "details": ["retry later"]}
        })))
        .mount(&server)
        .await;

    let params = UpdateProjectParams::new()
        .with_project_id("xk2lm8")
        .with_body(Project {
            name: "payments".to_string(),
            ..Default::default()
        });
    let err = api(&server)
        .project()
        .update_project(params, None)
        .await
        .unwrap_err();

    let payload = match err {
        OperationError::Response(UpdateProjectError::InternalServerError(payload)) => payload,
        other => panic!("expected a server error, got {other:?}"),
    };
    let details = payload.error.unwrap();
    assert_eq!(details.message, "etcd unavailable");
    assert_eq!(details.details, ["retry later"]);
}

#[tokio::test]
async fn test_undeclared_status_lands_in_default() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(418).set_body_json(json!({
            "error": {"code": 418, "message": "short and stout"}
        })))
        .mount(&server)
        .await;

    let err = api(&server)
        .project()
        .delete_project(DeleteProjectParams::new().with_project_id("xk2lm8"), None)
        .await
        .unwrap_err();

    assert!(!err.is_unexpected_success());
    match err.response() {
        Some(DeleteProjectError::Default(default)) => {
            assert_eq!(default.code(), 418);
            assert_eq!(default.payload().and_then(|p| p.message()), Some("short and stout"));
        }
        other => panic!("expected the default response, got {other:?}"),
    }
    assert!(err.to_string().starts_with("deleteProject: status 418"));
}

#[tokio::test]
async fn test_undeclared_success_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let err = api(&server)
        .project()
        .get_project(GetProjectParams::new().with_project_id("xk2lm8"), None)
        .await
        .unwrap_err();
    assert!(err.is_unexpected_success());
    assert_eq!(err.response().map(ReadResponse::code), Some(202));
}

#[tokio::test]
async fn test_missing_project_id_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = api(&server)
        .project()
        .get_project(GetProjectParams::new(), None)
        .await
        .unwrap_err();
    match err {
        OperationError::Api(ApiError::Params(errors)) => {
            assert_eq!(errors.errors()[0].name(), "project_id");
        }
        other => panic!("expected a parameter error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dot_project_id_never_reaches_the_collection() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = api(&server)
        .project()
        .delete_project(DeleteProjectParams::new().with_project_id("."), None)
        .await
        .unwrap_err();
    match err {
        OperationError::Api(ApiError::Params(errors)) => {
            assert_eq!(errors.errors()[0].name(), "project_id");
        }
        other => panic!("expected a parameter error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_projects_sends_display_all() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .and(query_param("displayAll", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "xk2lm8", "name": "payments", "clustersNumber": 3}
        ])))
        .mount(&server)
        .await;

    let projects = api(&server)
        .project()
        .list_projects(ListProjectsParams::new().with_display_all(true), None)
        .await
        .unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].clusters_number, 3);
}

#[tokio::test]
async fn test_create_project_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/projects"))
        .and(header("authorization", "Bearer s3cr3t"))
        .and(body_json(json!({"name": "payments", "labels": {"team": "billing"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "xk2lm8", "name": "payments", "status": "Inactive"
        })))
        .mount(&server)
        .await;

    let token = BearerToken::new("s3cr3t");
    let params =
        CreateProjectParams::new().with_body(ProjectBody::new("payments").with_label("team", "billing"));
    let project = api(&server)
        .project()
        .create_project(params, Some(&token))
        .await
        .unwrap();
    assert_eq!(project.id, "xk2lm8");
    assert_eq!(project.status, "Inactive");
}

#[tokio::test]
async fn test_patch_user_settings_sends_merge_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/me/settings"))
        .and(body_json(json!({"itemsPerPage": 25})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"itemsPerPage": 25})))
        .mount(&server)
        .await;

    let params = PatchCurrentUserSettingsParams::new().with_patch(json!({"itemsPerPage": 25}));
    let settings = api(&server)
        .settings()
        .patch_current_user_settings(params, None)
        .await
        .unwrap();
    assert_eq!(settings.items_per_page, Some(25));
}

#[tokio::test]
async fn test_project_backup_listing_filters_by_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/projects/xk2lm8/etcdbackupconfigs"))
        .and(query_param("type", "snapshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [{"name": "nightly", "spec": {"clusterId": "c1"}}],
            []
        ])))
        .mount(&server)
        .await;

    let params = ListProjectEtcdBackupConfigParams::new()
        .with_project_id("xk2lm8")
        .with_kind("snapshot");
    let grouped = api(&server)
        .etcd_backup_config()
        .list_project_etcd_backup_config(params, None)
        .await
        .unwrap();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0][0].spec.cluster_id, "c1");
    assert!(grouped[1].is_empty());
}

#[tokio::test]
async fn test_provider_headers_are_sent_when_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/providers/eks/subnets"))
        .and(header("Credential", "aws-preset"))
        .and(header("Region", "eu-central-1"))
        .and(header("VpcId", "vpc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"subnetId": "subnet-1", "vpcId": "vpc-123", "availabilityZone": "eu-central-1a", "default": true}
        ])))
        .mount(&server)
        .await;

    let params = ListEksSubnetsParams::new()
        .with_credential("aws-preset")
        .with_region("eu-central-1")
        .with_vpc_id("vpc-123");
    let subnets = api(&server)
        .eks()
        .list_eks_subnets(params, None)
        .await
        .unwrap();
    assert_eq!(subnets[0].subnet_id, "subnet-1");
    assert!(subnets[0].is_default);

    let received = server.received_requests().await.unwrap();
    assert!(!received[0].headers.contains_key("accesskeyid"));
}

#[tokio::test]
async fn test_gcp_subnetworks_for_datacenter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/providers/gcp/gcp-westeurope/subnetworks"))
        .and(header("ServiceAccount", "eyJ0eXBlIjoic2EifQ=="))
        .and(header("Network", "global/networks/default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 4371200000000000000u64,
            "name": "default",
            "network": "https://www.googleapis.com/compute/v1/projects/kkp/global/networks/default",
            "ipCidrRange": "10.156.0.0/20",
            "gatewayAddress": "10.156.0.1",
            "region": "europe-west3",
            "selfLink": "https://www.googleapis.com/compute/v1/projects/kkp/regions/europe-west3/subnetworks/default",
            "privateIpGoogleAccess": false,
            "kind": "compute#subnetwork",
            "path": "projects/kkp/regions/europe-west3/subnetworks/default",
            "ipFamily": "IPv4"
        }])))
        .mount(&server)
        .await;

    let params = ListGcpSubnetworksParams::new()
        .with_dc("gcp-westeurope")
        .with_service_account("eyJ0eXBlIjoic2EifQ==")
        .with_network("global/networks/default");
    let subnetworks = api(&server)
        .gcp()
        .list_gcp_subnetworks(params, None)
        .await
        .unwrap();

    assert_eq!(subnetworks.len(), 1);
    assert_eq!(subnetworks[0].ip_cidr_range, "10.156.0.0/20");
    assert_eq!(subnetworks[0].id, 4_371_200_000_000_000_000);
    assert_eq!(subnetworks[0].ip_family, "IPv4");

    let received = server.received_requests().await.unwrap();
    assert!(!received[0].headers.contains_key("credential"));
}

#[tokio::test]
async fn test_gcp_sizes_from_cluster_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/api/v1/projects/xk2lm8/dc/gcp-westeurope/clusters/c7n4qk9m2z/providers/gcp/sizes",
        ))
        .and(header("Zone", "europe-west3-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "e2-small", "description": "2 vCPUs, 2 GB RAM", "memory": 2048, "vcpus": 2},
            {"name": "n1-standard-2", "description": "2 vCPUs, 7.5 GB RAM", "memory": 7680, "vcpus": 2}
        ])))
        .mount(&server)
        .await;

    let params = ListGcpSizesNoCredentialsParams::new()
        .with_project_id("xk2lm8")
        .with_dc("gcp-westeurope")
        .with_cluster_id("c7n4qk9m2z")
        .with_zone("europe-west3-a");
    let sizes = api(&server)
        .gcp()
        .list_gcp_sizes_no_credentials(params, None)
        .await
        .unwrap();

    let names: Vec<&str> = sizes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["e2-small", "n1-standard-2"]);
    assert_eq!(sizes[1].memory, 7680);
}

/// Replays an empty JSON list and records which operations reached it.
#[derive(Debug, Default)]
struct RecordingTransport {
    seen: Mutex<Vec<&'static str>>,
}

impl ClientTransport for RecordingTransport {
    fn submit<'a>(
        &'a self,
        operation: ClientOperation<'a>,
        _formats: &'a Formats,
    ) -> BoxFuture<'a, Result<ClientResponse, ApiError>> {
        Box::pin(async move {
            self.seen.lock().unwrap().push(operation.id);
            Ok(ClientResponse::new(200, HeaderMap::new(), Bytes::from_static(b"[]")))
        })
    }
}

#[tokio::test]
async fn test_set_transport_reaches_every_facade() {
    let first = Arc::new(RecordingTransport::default());
    let second = Arc::new(RecordingTransport::default());
    let mut api = KubermaticApi::new(first.clone(), Arc::new(Formats::default()));

    api.set_transport(second.clone());

    api.admin().list_seeds(ListSeedsParams::new(), None).await.unwrap();
    api.seed().list_seed_names(ListSeedNamesParams::new(), None).await.unwrap();
    api.project()
        .list_projects(ListProjectsParams::new(), None)
        .await
        .unwrap();
    api.ipam_pool()
        .list_ipam_pools(ListIpamPoolsParams::new(), None)
        .await
        .unwrap();
    api.gke().list_gke_zones(ListGkeZonesParams::new(), None).await.unwrap();
    api.gcp()
        .list_gcp_networks(ListGcpNetworksParams::new(), None)
        .await
        .unwrap();

    assert!(first.seen.lock().unwrap().is_empty());
    assert_eq!(
        second.seen.lock().unwrap().as_slice(),
        [
            "listSeeds",
            "listSeedNames",
            "listProjects",
            "listIPAMPools",
            "listGKEZones",
            "listGCPNetworks",
        ]
    );
}
