use std::sync::Arc;

use kubermatic_models::{AnexiaTemplate, AnexiaVlan};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `listAnexiaVlans`.
    pub struct ListAnexiaVlansParams {
        header token: String = "Token" => with_token, set_token;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_params! {
    /// Parameters of `listAnexiaTemplates`.
    pub struct ListAnexiaTemplatesParams {
        header token: String = "Token" => with_token, set_token;
        header credential: String = "Credential" => with_credential, set_credential;
        header location: String = "Location" => with_location, set_location;
    }
}

operation_params! {
    /// Parameters of `listAnexiaVlansNoCredentials`.
    pub struct ListAnexiaVlansNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
    }
}

operation_params! {
    /// Parameters of `listAnexiaTemplatesNoCredentials`.
    pub struct ListAnexiaTemplatesNoCredentialsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path dc: String = "dc" => with_dc, set_dc;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
    }
}

operation_outcome! {
    /// Failures of `listAnexiaVlans`.
    pub enum ListAnexiaVlansError("listAnexiaVlans") {
        200 => Vec<AnexiaVlan>;
    }
}

operation_outcome! {
    /// Failures of `listAnexiaTemplates`.
    pub enum ListAnexiaTemplatesError("listAnexiaTemplates") {
        200 => Vec<AnexiaTemplate>;
    }
}

operation_outcome! {
    /// Failures of `listAnexiaVlansNoCredentials`.
    pub enum ListAnexiaVlansNoCredentialsError("listAnexiaVlansNoCredentials") {
        200 => Vec<AnexiaVlan>;
    }
}

operation_outcome! {
    /// Failures of `listAnexiaTemplatesNoCredentials`.
    pub enum ListAnexiaTemplatesNoCredentialsError("listAnexiaTemplatesNoCredentials") {
        200 => Vec<AnexiaTemplate>;
    }
}

#[derive(Debug, Clone)]
pub struct AnexiaClient {
    core: ClientCore,
}

impl AnexiaClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn list_anexia_vlans(
        &self,
        params: ListAnexiaVlansParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AnexiaVlan>, OperationError<ListAnexiaVlansError>> {
        let operation = ClientOperation::new(
            "listAnexiaVlans",
            RestMethod::Get,
            "/api/v1/providers/anexia/vlans",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// VM templates available at one Anexia location.
    pub async fn list_anexia_templates(
        &self,
        params: ListAnexiaTemplatesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AnexiaTemplate>, OperationError<ListAnexiaTemplatesError>> {
        let operation = ClientOperation::new(
            "listAnexiaTemplates",
            RestMethod::Get,
            "/api/v1/providers/anexia/templates",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_anexia_vlans_no_credentials(
        &self,
        params: ListAnexiaVlansNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AnexiaVlan>, OperationError<ListAnexiaVlansNoCredentialsError>> {
        let operation = ClientOperation::new(
            "listAnexiaVlansNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/anexia/vlans",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_anexia_templates_no_credentials(
        &self,
        params: ListAnexiaTemplatesNoCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<AnexiaTemplate>, OperationError<ListAnexiaTemplatesNoCredentialsError>> {
        let operation = ClientOperation::new(
            "listAnexiaTemplatesNoCredentials",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/dc/{dc}/clusters/{cluster_id}/providers/anexia/templates",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
