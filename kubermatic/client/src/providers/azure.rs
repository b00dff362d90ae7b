use std::sync::Arc;

use kubermatic_models::{AzureAvailabilityZones, AzureSize};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `listAzureSizes`.
    pub struct ListAzureSizesParams {
        header subscription_id: String = "SubscriptionID" => with_subscription_id, set_subscription_id;
        header tenant_id: String = "TenantID" => with_tenant_id, set_tenant_id;
        header client_id: String = "ClientID" => with_client_id, set_client_id;
        header client_secret: String = "ClientSecret" => with_client_secret, set_client_secret;
        header location: String = "Location" => with_location, set_location;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_params! {
    /// Parameters of `listAzureSKUAvailabilityZones`.
    pub struct ListAzureAvailabilityZonesParams {
        header subscription_id: String = "SubscriptionID" => with_subscription_id, set_subscription_id;
        header tenant_id: String = "TenantID" => with_tenant_id, set_tenant_id;
        header client_id: String = "ClientID" => with_client_id, set_client_id;
        header client_secret: String = "ClientSecret" => with_client_secret, set_client_secret;
        header location: String = "Location" => with_location, set_location;
        header credential: String = "Credential" => with_credential, set_credential;
        header sku_name: String = "SKUName" => with_sku_name, set_sku_name;
    }
}

operation_params! {
    /// Parameters of `listAzureSizesNoCredentials`.
    pub struct ListAzureSizesNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
    }
}

operation_params! {
    /// Parameters of `listAzureAvailabilityZonesNoCredentials`.
    pub struct ListAzureAvailabilityZonesNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        header sku_name: String = "SKUName" => with_sku_name, set_sku_name;
    }
}

operation_outcome! {
    /// Failures of `listAzureSizes`.
    pub enum ListAzureSizesError("listAzureSizes") {
        200 => Vec<AzureSize>;
    }
}

operation_outcome! {
    /// Failures of `listAzureSKUAvailabilityZones`.
    pub enum ListAzureAvailabilityZonesError("listAzureSKUAvailabilityZones") {
        200 => AzureAvailabilityZones;
    }
}

operation_outcome! {
    /// Failures of `listAzureSizesNoCredentials`.
    pub enum ListAzureSizesNoCredentialsError("listAzureSizesNoCredentials") {
        200 => Vec<AzureSize>;
    }
}

operation_outcome! {
    /// Failures of `listAzureAvailabilityZonesNoCredentials`.
    pub enum ListAzureAvailabilityZonesNoCredentialsError("listAzureAvailabilityZonesNoCredentials") {
        200 => AzureAvailabilityZones;
    }
}

/// Azure machine sizes and zones.
#[derive(Debug, Clone)]
pub struct AzureClient {
    core: ClientCore,
}

impl AzureClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn list_azure_sizes(
        &self,
        params: ListAzureSizesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AzureSize>, OperationError<ListAzureSizesError>> {
        let operation = ClientOperation::new(
            "listAzureSizes",
            RestMethod::Get,
            "/api/v1/providers/azure/sizes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Availability zones that offer the SKU in the given location.
    pub async fn list_azure_availability_zones(
        &self,
        params: ListAzureAvailabilityZonesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<AzureAvailabilityZones, OperationError<ListAzureAvailabilityZonesError>> {
        let operation = ClientOperation::new(
            "listAzureSKUAvailabilityZones",
            RestMethod::Get,
            "/api/v1/providers/azure/availabilityzones",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_azure_sizes_no_credentials(
        &self,
        params: ListAzureSizesNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AzureSize>, OperationError<ListAzureSizesNoCredentialsError>> {
        let operation = ClientOperation::new(
            "listAzureSizesNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/azure/sizes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_azure_availability_zones_no_credentials(
        &self,
        params: ListAzureAvailabilityZonesNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<AzureAvailabilityZones, OperationError<ListAzureAvailabilityZonesNoCredentialsError>>
    {
        let operation = ClientOperation::new(
            "listAzureAvailabilityZonesNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/azure/availabilityzones",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
