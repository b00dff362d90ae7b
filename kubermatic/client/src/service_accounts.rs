//! Project service accounts.

use std::sync::Arc;

use kubermatic_models::{ServiceAccount, ServiceAccountBody};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `addServiceAccountToProject`.
    pub struct AddServiceAccountToProjectParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        body body: ServiceAccountBody = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `listServiceAccounts`.
    pub struct ListServiceAccountsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
    }
}

operation_params! {
    /// Parameters of `updateServiceAccount`.
    pub struct UpdateServiceAccountParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path service_account_id: String = "serviceaccount_id" => with_service_account_id, set_service_account_id;
        body body: ServiceAccount = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `deleteServiceAccount`.
    pub struct DeleteServiceAccountParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path service_account_id: String = "serviceaccount_id" => with_service_account_id, set_service_account_id;
    }
}

operation_outcome! {
    /// Failures of `addServiceAccountToProject`.
    pub enum AddServiceAccountToProjectError("addServiceAccountToProject") {
        201 => ServiceAccount;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `listServiceAccounts`.
    pub enum ListServiceAccountsError("listServiceAccounts") {
        200 => Vec<ServiceAccount>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `updateServiceAccount`.
    pub enum UpdateServiceAccountError("updateServiceAccount") {
        200 => ServiceAccount;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `deleteServiceAccount`.
    pub enum DeleteServiceAccountError("deleteServiceAccount") {
        200 => empty;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

/// Non-human identities scoped to one project.
#[derive(Debug, Clone)]
pub struct ServiceAccountsClient {
    core: ClientCore,
}

impl ServiceAccountsClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn add_service_account_to_project(
        &self,
        params: AddServiceAccountToProjectParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<ServiceAccount, OperationError<AddServiceAccountToProjectError>> {
        let operation = ClientOperation::new(
            "addServiceAccountToProject",
            RestMethod::Post,
            "/api/v1/projects/{project_id}/serviceaccounts",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_service_accounts(
        &self,
        params: ListServiceAccountsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<ServiceAccount>, OperationError<ListServiceAccountsError>> {
        let operation = ClientOperation::new(
            "listServiceAccounts",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/serviceaccounts",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Renames the account or moves it to another group.
    pub async fn update_service_account(
        &self,
        params: UpdateServiceAccountParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<ServiceAccount, OperationError<UpdateServiceAccountError>> {
        let operation = ClientOperation::new(
            "updateServiceAccount",
            RestMethod::Put,
            "/api/v1/projects/{project_id}/serviceaccounts/{serviceaccount_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn delete_service_account(
        &self,
        params: DeleteServiceAccountParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<DeleteServiceAccountError>> {
        let operation = ClientOperation::new(
            "deleteServiceAccount",
            RestMethod::Delete,
            "/api/v1/projects/{project_id}/serviceaccounts/{serviceaccount_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
