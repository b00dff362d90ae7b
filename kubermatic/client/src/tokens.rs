//! Service account tokens.
//!
//! The secret token value is only returned by the create and update calls;
//! listings and patches return [`PublicServiceAccountToken`] without it.

use std::sync::Arc;

use kubermatic_models::{PublicServiceAccountToken, ServiceAccountToken, ServiceAccountTokenBody};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

// =============================================================================
// Parameters
// =============================================================================

operation_params! {
    /// Parameters of `addTokenToServiceAccount`.
    pub struct AddTokenToServiceAccountParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path service_account_id: String = "serviceaccount_id" => with_service_account_id, set_service_account_id;
        body body: ServiceAccountTokenBody = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `listServiceAccountTokens`.
    pub struct ListServiceAccountTokensParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path service_account_id: String = "serviceaccount_id" => with_service_account_id, set_service_account_id;
    }
}

operation_params! {
    /// Parameters of `updateServiceAccountToken`.
    pub struct UpdateServiceAccountTokenParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path service_account_id: String = "serviceaccount_id" => with_service_account_id, set_service_account_id;
        path token_id: String = "token_id" => with_token_id, set_token_id;
        body body: PublicServiceAccountToken = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `patchServiceAccountToken`.
    pub struct PatchServiceAccountTokenParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path service_account_id: String = "serviceaccount_id" => with_service_account_id, set_service_account_id;
        path token_id: String = "token_id" => with_token_id, set_token_id;
        body patch: serde_json::Value = "Patch" => with_patch, set_patch;
    }
}

operation_params! {
    /// Parameters of `deleteServiceAccountToken`.
    pub struct DeleteServiceAccountTokenParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path service_account_id: String = "serviceaccount_id" => with_service_account_id, set_service_account_id;
        path token_id: String = "token_id" => with_token_id, set_token_id;
    }
}

// =============================================================================
// Outcomes
// =============================================================================

operation_outcome! {
    /// Failures of `addTokenToServiceAccount`.
    pub enum AddTokenToServiceAccountError("addTokenToServiceAccount") {
        201 => ServiceAccountToken;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `listServiceAccountTokens`.
    pub enum ListServiceAccountTokensError("listServiceAccountTokens") {
        200 => Vec<PublicServiceAccountToken>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `updateServiceAccountToken`.
    pub enum UpdateServiceAccountTokenError("updateServiceAccountToken") {
        200 => ServiceAccountToken;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `patchServiceAccountToken`.
    pub enum PatchServiceAccountTokenError("patchServiceAccountToken") {
        200 => PublicServiceAccountToken;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `deleteServiceAccountToken`.
    pub enum DeleteServiceAccountTokenError("deleteServiceAccountToken") {
        200 => empty;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

// =============================================================================
// Facade
// =============================================================================

#[derive(Debug, Clone)]
pub struct TokensClient {
    core: ClientCore,
}

impl TokensClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    /// Issues a new token; the response is the only place its secret appears.
    pub async fn add_token_to_service_account(
        &self,
        params: AddTokenToServiceAccountParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<ServiceAccountToken, OperationError<AddTokenToServiceAccountError>> {
        let operation = ClientOperation::new(
            "addTokenToServiceAccount",
            RestMethod::Post,
            "/api/v1/projects/{project_id}/serviceaccounts/{serviceaccount_id}/tokens",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_service_account_tokens(
        &self,
        params: ListServiceAccountTokensParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<PublicServiceAccountToken>, OperationError<ListServiceAccountTokensError>>
    {
        let operation = ClientOperation::new(
            "listServiceAccountTokens",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/serviceaccounts/{serviceaccount_id}/tokens",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Regenerates the token's secret.
    pub async fn update_service_account_token(
        &self,
        params: UpdateServiceAccountTokenParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<ServiceAccountToken, OperationError<UpdateServiceAccountTokenError>> {
        let operation = ClientOperation::new(
            "updateServiceAccountToken",
            RestMethod::Put,
            "/api/v1/projects/{project_id}/serviceaccounts/{serviceaccount_id}/tokens/{token_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Renames the token without touching its secret.
    pub async fn patch_service_account_token(
        &self,
        params: PatchServiceAccountTokenParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<PublicServiceAccountToken, OperationError<PatchServiceAccountTokenError>> {
        let operation = ClientOperation::new(
            "patchServiceAccountToken",
            RestMethod::Patch,
            "/api/v1/projects/{project_id}/serviceaccounts/{serviceaccount_id}/tokens/{token_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn delete_service_account_token(
        &self,
        params: DeleteServiceAccountTokenParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<DeleteServiceAccountTokenError>> {
        let operation = ClientOperation::new(
            "deleteServiceAccountToken",
            RestMethod::Delete,
            "/api/v1/projects/{project_id}/serviceaccounts/{serviceaccount_id}/tokens/{token_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
