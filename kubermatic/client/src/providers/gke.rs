use std::sync::Arc;

use kubermatic_models::{GkeCluster, GkeDiskType, GkeImage, GkeZone};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `validateGKECredentials`.
    pub struct ValidateGkeCredentialsParams {
        /// Base64-encoded service account JSON key.
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
    }
}

operation_params! {
    /// Parameters of `listGKEZones`.
    pub struct ListGkeZonesParams {
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_params! {
    /// Parameters of `listGKEImages`.
    pub struct ListGkeImagesParams {
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
        header credential: String = "Credential" => with_credential, set_credential;
        header zone: String = "Zone" => with_zone, set_zone;
    }
}

operation_params! {
    /// Parameters of `listGKEDiskTypes`.
    pub struct ListGkeDiskTypesParams {
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
        header credential: String = "Credential" => with_credential, set_credential;
        header zone: String = "Zone" => with_zone, set_zone;
    }
}

operation_params! {
    /// Parameters of `listGKEClusters`.
    pub struct ListGkeClustersParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        header service_account: String = "ServiceAccount" => with_service_account, set_service_account;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_outcome! {
    /// Failures of `validateGKECredentials`.
    pub enum ValidateGkeCredentialsError("validateGKECredentials") {
        200 => empty;
    }
}

operation_outcome! {
    /// Failures of `listGKEZones`.
    pub enum ListGkeZonesError("listGKEZones") {
        200 => Vec<GkeZone>;
    }
}

operation_outcome! {
    /// Failures of `listGKEImages`.
    pub enum ListGkeImagesError("listGKEImages") {
        200 => Vec<GkeImage>;
    }
}

operation_outcome! {
    /// Failures of `listGKEDiskTypes`.
    pub enum ListGkeDiskTypesError("listGKEDiskTypes") {
        200 => Vec<GkeDiskType>;
    }
}

operation_outcome! {
    /// Failures of `listGKEClusters`.
    pub enum ListGkeClustersError("listGKEClusters") {
        200 => Vec<GkeCluster>;
    }
}

/// Google Kubernetes Engine lookups.
#[derive(Debug, Clone)]
pub struct GkeClient {
    core: ClientCore,
}

impl GkeClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn validate_gke_credentials(
        &self,
        params: ValidateGkeCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<ValidateGkeCredentialsError>> {
        let operation = ClientOperation::new(
            "validateGKECredentials",
            RestMethod::Get,
            "/api/v2/providers/gke/validatecredentials",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gke_zones(
        &self,
        params: ListGkeZonesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GkeZone>, OperationError<ListGkeZonesError>> {
        let operation =
            ClientOperation::new("listGKEZones", RestMethod::Get, "/api/v2/providers/gke/zones", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gke_images(
        &self,
        params: ListGkeImagesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GkeImage>, OperationError<ListGkeImagesError>> {
        let operation = ClientOperation::new(
            "listGKEImages",
            RestMethod::Get,
            "/api/v2/providers/gke/images",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gke_disk_types(
        &self,
        params: ListGkeDiskTypesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GkeDiskType>, OperationError<ListGkeDiskTypesError>> {
        let operation = ClientOperation::new(
            "listGKEDiskTypes",
            RestMethod::Get,
            "/api/v2/providers/gke/disktypes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_gke_clusters(
        &self,
        params: ListGkeClustersParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<GkeCluster>, OperationError<ListGkeClustersError>> {
        let operation = ClientOperation::new(
            "listGKEClusters",
            RestMethod::Get,
            "/api/v2/projects/{project_id}/providers/gke/clusters",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
