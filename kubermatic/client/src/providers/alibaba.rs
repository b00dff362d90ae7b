use std::sync::Arc;

use kubermatic_models::{AlibabaInstanceType, AlibabaZone};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `listAlibabaInstanceTypes`.
    pub struct ListAlibabaInstanceTypesParams {
        header access_key_id: String = "AccessKeyID" => with_access_key_id, set_access_key_id;
        header access_key_secret: String = "AccessKeySecret" => with_access_key_secret, set_access_key_secret;
        header credential: String = "Credential" => with_credential, set_credential;
        header region: String = "Region" => with_region, set_region;
    }
}

operation_params! {
    /// Parameters of `listAlibabaZones`.
    pub struct ListAlibabaZonesParams {
        header access_key_id: String = "AccessKeyID" => with_access_key_id, set_access_key_id;
        header access_key_secret: String = "AccessKeySecret" => with_access_key_secret, set_access_key_secret;
        header credential: String = "Credential" => with_credential, set_credential;
        header region: String = "Region" => with_region, set_region;
    }
}

operation_params! {
    /// Parameters of `listAlibabaInstanceTypesNoCredentials`.
    pub struct ListAlibabaInstanceTypesNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        header region: String = "Region" => with_region, set_region;
    }
}

operation_params! {
    /// Parameters of `listAlibabaZonesNoCredentials`.
    pub struct ListAlibabaZonesNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        header region: String = "Region" => with_region, set_region;
    }
}

operation_outcome! {
    /// Failures of `listAlibabaInstanceTypes`.
    pub enum ListAlibabaInstanceTypesError("listAlibabaInstanceTypes") {
        200 => Vec<AlibabaInstanceType>;
    }
}

operation_outcome! {
    /// Failures of `listAlibabaZones`.
    pub enum ListAlibabaZonesError("listAlibabaZones") {
        200 => Vec<AlibabaZone>;
    }
}

operation_outcome! {
    /// Failures of `listAlibabaInstanceTypesNoCredentials`.
    pub enum ListAlibabaInstanceTypesNoCredentialsError("listAlibabaInstanceTypesNoCredentials") {
        200 => Vec<AlibabaInstanceType>;
    }
}

operation_outcome! {
    /// Failures of `listAlibabaZonesNoCredentials`.
    pub enum ListAlibabaZonesNoCredentialsError("listAlibabaZonesNoCredentials") {
        200 => Vec<AlibabaZone>;
    }
}

#[derive(Debug, Clone)]
pub struct AlibabaClient {
    core: ClientCore,
}

impl AlibabaClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn list_alibaba_instance_types(
        &self,
        params: ListAlibabaInstanceTypesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AlibabaInstanceType>, OperationError<ListAlibabaInstanceTypesError>> {
        let operation = ClientOperation::new(
            "listAlibabaInstanceTypes",
            RestMethod::Get,
            "/api/v1/providers/alibaba/instancetypes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_alibaba_zones(
        &self,
        params: ListAlibabaZonesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AlibabaZone>, OperationError<ListAlibabaZonesError>> {
        let operation = ClientOperation::new(
            "listAlibabaZones",
            RestMethod::Get,
            "/api/v1/providers/alibaba/zones",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_alibaba_instance_types_no_credentials(
        &self,
        params: ListAlibabaInstanceTypesNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<
        Vec<AlibabaInstanceType>,
        OperationError<ListAlibabaInstanceTypesNoCredentialsError>,
    > {
        let operation = ClientOperation::new(
            "listAlibabaInstanceTypesNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/alibaba/instancetypes",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_alibaba_zones_no_credentials(
        &self,
        params: ListAlibabaZonesNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AlibabaZone>, OperationError<ListAlibabaZonesNoCredentialsError>> {
        let operation = ClientOperation::new(
            "listAlibabaZonesNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/alibaba/zones",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
