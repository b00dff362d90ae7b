use std::sync::Arc;

use kubermatic_models::{AksCluster, AksLocation, AksVmSize, AzureResourceGroup};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `validateAKSCredentials`.
    pub struct ValidateAksCredentialsParams {
        header tenant_id: String = "TenantID" => with_tenant_id, set_tenant_id;
        header subscription_id: String = "SubscriptionID" => with_subscription_id, set_subscription_id;
        header client_id: String = "ClientID" => with_client_id, set_client_id;
        header client_secret: String = "ClientSecret" => with_client_secret, set_client_secret;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_params! {
    /// Parameters of `listAKSVMSizes`.
    pub struct ListAksVmSizesParams {
        header tenant_id: String = "TenantID" => with_tenant_id, set_tenant_id;
        header subscription_id: String = "SubscriptionID" => with_subscription_id, set_subscription_id;
        header client_id: String = "ClientID" => with_client_id, set_client_id;
        header client_secret: String = "ClientSecret" => with_client_secret, set_client_secret;
        header credential: String = "Credential" => with_credential, set_credential;
        header location: String = "Location" => with_location, set_location;
    }
}

operation_params! {
    /// Parameters of `listAKSLocations`.
    pub struct ListAksLocationsParams {
        header tenant_id: String = "TenantID" => with_tenant_id, set_tenant_id;
        header subscription_id: String = "SubscriptionID" => with_subscription_id, set_subscription_id;
        header client_id: String = "ClientID" => with_client_id, set_client_id;
        header client_secret: String = "ClientSecret" => with_client_secret, set_client_secret;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_params! {
    /// Parameters of `listAKSResourceGroups`.
    pub struct ListAksResourceGroupsParams {
        header tenant_id: String = "TenantID" => with_tenant_id, set_tenant_id;
        header subscription_id: String = "SubscriptionID" => with_subscription_id, set_subscription_id;
        header client_id: String = "ClientID" => with_client_id, set_client_id;
        header client_secret: String = "ClientSecret" => with_client_secret, set_client_secret;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_params! {
    /// Parameters of `listAKSClusters`.
    pub struct ListAksClustersParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        header tenant_id: String = "TenantID" => with_tenant_id, set_tenant_id;
        header subscription_id: String = "SubscriptionID" => with_subscription_id, set_subscription_id;
        header client_id: String = "ClientID" => with_client_id, set_client_id;
        header client_secret: String = "ClientSecret" => with_client_secret, set_client_secret;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_outcome! {
    /// Failures of `validateAKSCredentials`.
    pub enum ValidateAksCredentialsError("validateAKSCredentials") {
        200 => empty;
    }
}

operation_outcome! {
    /// Failures of `listAKSVMSizes`.
    pub enum ListAksVmSizesError("listAKSVMSizes") {
        200 => Vec<AksVmSize>;
    }
}

operation_outcome! {
    /// Failures of `listAKSLocations`.
    pub enum ListAksLocationsError("listAKSLocations") {
        200 => Vec<AksLocation>;
    }
}

operation_outcome! {
    /// Failures of `listAKSResourceGroups`.
    pub enum ListAksResourceGroupsError("listAKSResourceGroups") {
        200 => Vec<AzureResourceGroup>;
    }
}

operation_outcome! {
    /// Failures of `listAKSClusters`.
    pub enum ListAksClustersError("listAKSClusters") {
        200 => Vec<AksCluster>;
    }
}

/// Azure Kubernetes Service lookups.
#[derive(Debug, Clone)]
pub struct AksClient {
    core: ClientCore,
}

impl AksClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    /// Succeeds when the service principal can reach the subscription.
    pub async fn validate_aks_credentials(
        &self,
        params: ValidateAksCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<ValidateAksCredentialsError>> {
        let operation = ClientOperation::new(
            "validateAKSCredentials",
            RestMethod::Get,
            "/api/v2/providers/aks/validatecredentials",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_aks_vm_sizes(
        &self,
        params: ListAksVmSizesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AksVmSize>, OperationError<ListAksVmSizesError>> {
        let operation = ClientOperation::new(
            "listAKSVMSizes",
            RestMethod::Get,
            "/api/v2/providers/aks/vmsizes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_aks_locations(
        &self,
        params: ListAksLocationsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AksLocation>, OperationError<ListAksLocationsError>> {
        let operation = ClientOperation::new(
            "listAKSLocations",
            RestMethod::Get,
            "/api/v2/providers/aks/locations",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_aks_resource_groups(
        &self,
        params: ListAksResourceGroupsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AzureResourceGroup>, OperationError<ListAksResourceGroupsError>> {
        let operation = ClientOperation::new(
            "listAKSResourceGroups",
            RestMethod::Get,
            "/api/v2/providers/aks/resourcegroups",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// AKS clusters in the subscription, flagged when already imported into the project.
    pub async fn list_aks_clusters(
        &self,
        params: ListAksClustersParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AksCluster>, OperationError<ListAksClustersError>> {
        let operation = ClientOperation::new(
            "listAKSClusters",
            RestMethod::Get,
            "/api/v2/projects/{project_id}/providers/aks/clusters",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
