use std::sync::Arc;

use kubermatic_models::{GcpDiskType, GcpMachineSize, GcpNetwork, GcpSubnetwork, GcpZone};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `listGCPDiskTypes`.
    pub struct ListGcpDiskTypesParams {
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
        header credential: String = "Credential" => with_credential, set_credential;
        header zone: String = "Zone" => with_zone, set_zone;
    }
}

operation_params! {
    /// Parameters of `listGCPSizes`.
    pub struct ListGcpSizesParams {
        /// Base64-encoded service account JSON key.
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
        header credential: String = "Credential" => with_credential, set_credential;
        header zone: String = "Zone" => with_zone, set_zone;
    }
}

operation_params! {
    /// Parameters of `listGCPZones`.
    pub struct ListGcpZonesParams {
        path dc: String = "dc" => with_dc, set_dc;
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_params! {
    /// Parameters of `listGCPNetworks`.
    pub struct ListGcpNetworksParams {
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_params! {
    /// Parameters of `listGCPSubnetworks`.
    pub struct ListGcpSubnetworksParams {
        path dc: String = "dc" => with_dc, set_dc;
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
        header credential: String = "Credential" => with_credential, set_credential;
        header network: String = "Network" => with_network, set_network;
    }
}

operation_params! {
    /// Parameters of `listGCPDiskTypesNoCredentials`.
    pub struct ListGcpDiskTypesNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        header zone: String = "Zone" => with_zone, set_zone;
    }
}

operation_params! {
    /// Parameters of `listGCPSizesNoCredentials`.
    pub struct ListGcpSizesNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        header zone: String = "Zone" => with_zone, set_zone;
    }
}

operation_params! {
    /// Parameters of `listGCPZonesNoCredentials`.
    pub struct ListGcpZonesNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
    }
}

operation_params! {
    /// Parameters of `listGCPNetworksNoCredentials`.
    pub struct ListGcpNetworksNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
    }
}

operation_params! {
    /// Parameters of `listGCPSubnetworksNoCredentials`.
    pub struct ListGcpSubnetworksNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        header network: String = "Network" => with_network, set_network;
    }
}

operation_outcome! {
    /// Failures of `listGCPDiskTypes`.
    pub enum ListGcpDiskTypesError("listGCPDiskTypes") {
        200 => Vec<GcpDiskType>;
    }
}

operation_outcome! {
    /// Failures of `listGCPSizes`.
    pub enum ListGcpSizesError("listGCPSizes") {
        200 => Vec<GcpMachineSize>;
    }
}

operation_outcome! {
    /// Failures of `listGCPZones`.
    pub enum ListGcpZonesError("listGCPZones") {
        200 => Vec<GcpZone>;
    }
}

operation_outcome! {
    /// Failures of `listGCPNetworks`.
    pub enum ListGcpNetworksError("listGCPNetworks") {
        200 => Vec<GcpNetwork>;
    }
}

operation_outcome! {
    /// Failures of `listGCPSubnetworks`.
    pub enum ListGcpSubnetworksError("listGCPSubnetworks") {
        200 => Vec<GcpSubnetwork>;
    }
}

operation_outcome! {
    /// Failures of `listGCPDiskTypesNoCredentials`.
    pub enum ListGcpDiskTypesNoCredentialsError("listGCPDiskTypesNoCredentials") {
        200 => Vec<GcpDiskType>;
    }
}

operation_outcome! {
    /// Failures of `listGCPSizesNoCredentials`.
    pub enum ListGcpSizesNoCredentialsError("listGCPSizesNoCredentials") {
        200 => Vec<GcpMachineSize>;
    }
}

operation_outcome! {
    /// Failures of `listGCPZonesNoCredentials`.
    pub enum ListGcpZonesNoCredentialsError("listGCPZonesNoCredentials") {
        200 => Vec<GcpZone>;
    }
}

operation_outcome! {
    /// Failures of `listGCPNetworksNoCredentials`.
    pub enum ListGcpNetworksNoCredentialsError("listGCPNetworksNoCredentials") {
        200 => Vec<GcpNetwork>;
    }
}

operation_outcome! {
    /// Failures of `listGCPSubnetworksNoCredentials`.
    pub enum ListGcpSubnetworksNoCredentialsError("listGCPSubnetworksNoCredentials") {
        200 => Vec<GcpSubnetwork>;
    }
}

/// Compute Engine lookups for clusters KKP provisions on GCP.
#[derive(Debug, Clone)]
pub struct GcpClient {
    core: ClientCore,
}

impl GcpClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn list_gcp_disk_types(
        &self,
        params: ListGcpDiskTypesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpDiskType>, OperationError<ListGcpDiskTypesError>> {
        let operation = ClientOperation::new(
            "listGCPDiskTypes",
            RestMethod::Get,
            "/api/v1/providers/gcp/disktypes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Machine types offered in one zone.
    pub async fn list_gcp_sizes(
        &self,
        params: ListGcpSizesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpMachineSize>, OperationError<ListGcpSizesError>> {
        let operation = ClientOperation::new(
            "listGCPSizes",
            RestMethod::Get,
            "/api/v1/providers/gcp/sizes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Zones of the region configured for datacenter `dc`.
    pub async fn list_gcp_zones(
        &self,
        params: ListGcpZonesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpZone>, OperationError<ListGcpZonesError>> {
        let operation = ClientOperation::new(
            "listGCPZones",
            RestMethod::Get,
            "/api/v1/providers/gcp/{dc}/zones",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gcp_networks(
        &self,
        params: ListGcpNetworksParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpNetwork>, OperationError<ListGcpNetworksError>> {
        let operation = ClientOperation::new(
            "listGCPNetworks",
            RestMethod::Get,
            "/api/v1/providers/gcp/networks",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Subnetworks of `network` in the region of datacenter `dc`.
    pub async fn list_gcp_subnetworks(
        &self,
        params: ListGcpSubnetworksParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpSubnetwork>, OperationError<ListGcpSubnetworksError>> {
        let operation = ClientOperation::new(
            "listGCPSubnetworks",
            RestMethod::Get,
            "/api/v1/providers/gcp/{dc}/subnetworks",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gcp_disk_types_no_credentials(
        &self,
        params: ListGcpDiskTypesNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpDiskType>, OperationError<ListGcpDiskTypesNoCredentialsError>> {
        let operation = ClientOperation::new(
            "listGCPDiskTypesNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/gcp/disktypes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gcp_sizes_no_credentials(
        &self,
        params: ListGcpSizesNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpMachineSize>, OperationError<ListGcpSizesNoCredentialsError>> {
        let operation = ClientOperation::new(
            "listGCPSizesNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/gcp/sizes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gcp_zones_no_credentials(
        &self,
        params: ListGcpZonesNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpZone>, OperationError<ListGcpZonesNoCredentialsError>> {
        let operation = ClientOperation::new(
            "listGCPZonesNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/gcp/zones",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gcp_networks_no_credentials(
        &self,
        params: ListGcpNetworksNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpNetwork>, OperationError<ListGcpNetworksNoCredentialsError>> {
        let operation = ClientOperation::new(
            "listGCPNetworksNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/gcp/networks",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gcp_subnetworks_no_credentials(
        &self,
        params: ListGcpSubnetworksNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GcpSubnetwork>, OperationError<ListGcpSubnetworksNoCredentialsError>> {
        let operation = ClientOperation::new(
            "listGCPSubnetworksNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/gcp/subnetworks",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
