//! Cluster addons.

use std::sync::Arc;

use kubermatic_models::Addon;
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

// =============================================================================
// Parameters
// =============================================================================

operation_params! {
    /// Parameters of `listAccessibleAddons`.
    pub struct ListAccessibleAddonsParams {}
}

operation_params! {
    /// Parameters of `listInstallableAddonsV2`.
    pub struct ListInstallableAddonsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
    }
}

operation_params! {
    /// Parameters of `createAddonV2`.
    pub struct CreateAddonParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        body body: Addon = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `listAddonsV2`.
    pub struct ListAddonsParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
    }
}

operation_params! {
    /// Parameters of `getAddonV2`.
    pub struct GetAddonParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        path addon_id: String = "addon_id" => with_addon_id, set_addon_id;
    }
}

operation_params! {
    /// Parameters of `patchAddonV2`.
    pub struct PatchAddonParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        path addon_id: String = "addon_id" => with_addon_id, set_addon_id;
        body body: Addon = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `deleteAddonV2`.
    pub struct DeleteAddonParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        path addon_id: String = "addon_id" => with_addon_id, set_addon_id;
    }
}

// =============================================================================
// Outcomes
// =============================================================================

operation_outcome! {
    /// Failures of `listAccessibleAddons`.
    pub enum ListAccessibleAddonsError("listAccessibleAddons") {
        200 => Vec<String>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `listInstallableAddonsV2`.
    pub enum ListInstallableAddonsError("listInstallableAddonsV2") {
        200 => Vec<String>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `createAddonV2`.
    pub enum CreateAddonError("createAddonV2") {
        201 => Addon;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `listAddonsV2`.
    pub enum ListAddonsError("listAddonsV2") {
        200 => Vec<Addon>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `getAddonV2`.
    pub enum GetAddonError("getAddonV2") {
        200 => Addon;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `patchAddonV2`.
    pub enum PatchAddonError("patchAddonV2") {
        200 => Addon;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `deleteAddonV2`.
    pub enum DeleteAddonError("deleteAddonV2") {
        200 => empty;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

// =============================================================================
// Facade
// =============================================================================

/// Addons installed into user clusters.
#[derive(Debug, Clone)]
pub struct AddonClient {
    core: ClientCore,
}

impl AddonClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    /// Names of every addon the platform allows, regardless of cluster.
    pub async fn list_accessible_addons(
        &self,
        params: ListAccessibleAddonsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<String>, OperationError<ListAccessibleAddonsError>> {
        let operation = ClientOperation::new(
            "listAccessibleAddons",
            RestMethod::Post,
            "/api/v1/addons",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Names of the addons not yet installed in the cluster.
    pub async fn list_installable_addons_v2(
        &self,
        params: ListInstallableAddonsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<String>, OperationError<ListInstallableAddonsError>> {
        let operation = ClientOperation::new(
            "listInstallableAddonsV2",
            RestMethod::Get,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/installableaddons",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn create_addon_v2(
        &self,
        params: CreateAddonParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Addon, OperationError<CreateAddonError>> {
        let operation = ClientOperation::new(
            "createAddonV2",
            RestMethod::Post,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/addons",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_addons_v2(
        &self,
        params: ListAddonsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<Addon>, OperationError<ListAddonsError>> {
        let operation = ClientOperation::new(
            "listAddonsV2",
            RestMethod::Get,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/addons",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn get_addon_v2(
        &self,
        params: GetAddonParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Addon, OperationError<GetAddonError>> {
        let operation = ClientOperation::new(
            "getAddonV2",
            RestMethod::Get,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/addons/{addon_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn patch_addon_v2(
        &self,
        params: PatchAddonParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Addon, OperationError<PatchAddonError>> {
        let operation = ClientOperation::new(
            "patchAddonV2",
            RestMethod::Patch,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/addons/{addon_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn delete_addon_v2(
        &self,
        params: DeleteAddonParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<DeleteAddonError>> {
        let operation = ClientOperation::new(
            "deleteAddonV2",
            RestMethod::Delete,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/addons/{addon_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
