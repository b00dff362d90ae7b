//! Administrator operations: admins, global settings and seeds.

use std::sync::Arc;

use kubermatic_models::{Admin, CreateSeedBody, GlobalSettings, Seed};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

// =============================================================================
// Parameters
// =============================================================================

operation_params! {
    /// Parameters of `getAdmins`.
    pub struct GetAdminsParams {}
}

operation_params! {
    /// Parameters of `setAdmin`.
    pub struct SetAdminParams {
        body body: Admin = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `getKubermaticSettings`.
    pub struct GetKubermaticSettingsParams {}
}

operation_params! {
    /// Parameters of `patchKubermaticSettings`.
    pub struct PatchKubermaticSettingsParams {
        /// JSON merge patch applied to the current settings.
        body patch: serde_json::Value = "Patch" => with_patch, set_patch;
    }
}

operation_params! {
    /// Parameters of `listSeeds`.
    pub struct ListSeedsParams {}
}

operation_params! {
    /// Parameters of `getSeed`.
    pub struct GetSeedParams {
        path name: String = "seed_name" => with_name, set_name;
    }
}

operation_params! {
    /// Parameters of `createSeed`.
    pub struct CreateSeedParams {
        body body: CreateSeedBody = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `updateSeed`.
    pub struct UpdateSeedParams {
        path name: String = "seed_name" => with_name, set_name;
        body body: Seed = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `deleteSeed`.
    pub struct DeleteSeedParams {
        path name: String = "seed_name" => with_name, set_name;
    }
}

// =============================================================================
// Outcomes
// =============================================================================

operation_outcome! {
    /// Failures of `getAdmins`.
    pub enum GetAdminsError("getAdmins") {
        200 => Vec<Admin>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `setAdmin`.
    pub enum SetAdminError("setAdmin") {
        200 => Admin;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `getKubermaticSettings`.
    pub enum GetKubermaticSettingsError("getKubermaticSettings") {
        200 => GlobalSettings;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `patchKubermaticSettings`.
    pub enum PatchKubermaticSettingsError("patchKubermaticSettings") {
        200 => GlobalSettings;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `listSeeds`.
    pub enum ListSeedsError("listSeeds") {
        200 => Vec<Seed>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `getSeed`.
    pub enum GetSeedError("getSeed") {
        200 => Seed;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `createSeed`.
    pub enum CreateSeedError("createSeed") {
        200 => Seed;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `updateSeed`.
    pub enum UpdateSeedError("updateSeed") {
        200 => Seed;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `deleteSeed`.
    pub enum DeleteSeedError("deleteSeed") {
        200 => empty;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

// =============================================================================
// Facade
// =============================================================================

/// Operations reserved to platform administrators.
#[derive(Debug, Clone)]
pub struct AdminClient {
    core: ClientCore,
}

impl AdminClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    /// Lists users with administrator rights.
    pub async fn get_admins(
        &self,
        params: GetAdminsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<Admin>, OperationError<GetAdminsError>> {
        let operation =
            ClientOperation::new("getAdmins", RestMethod::Get, "/api/v1/admin/admins", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    /// Grants or revokes administrator rights.
    pub async fn set_admin(
        &self,
        params: SetAdminParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Admin, OperationError<SetAdminError>> {
        let operation =
            ClientOperation::new("setAdmin", RestMethod::Put, "/api/v1/admin/admins", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn get_kubermatic_settings(
        &self,
        params: GetKubermaticSettingsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<GlobalSettings, OperationError<GetKubermaticSettingsError>> {
        let operation = ClientOperation::new(
            "getKubermaticSettings",
            RestMethod::Get,
            "/api/v1/admin/settings",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Applies a JSON merge patch to the global settings.
    pub async fn patch_kubermatic_settings(
        &self,
        params: PatchKubermaticSettingsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<GlobalSettings, OperationError<PatchKubermaticSettingsError>> {
        let operation = ClientOperation::new(
            "patchKubermaticSettings",
            RestMethod::Patch,
            "/api/v1/admin/settings",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_seeds(
        &self,
        params: ListSeedsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<Seed>, OperationError<ListSeedsError>> {
        let operation =
            ClientOperation::new("listSeeds", RestMethod::Get, "/api/v1/admin/seeds", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn get_seed(
        &self,
        params: GetSeedParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Seed, OperationError<GetSeedError>> {
        let operation = ClientOperation::new(
            "getSeed",
            RestMethod::Get,
            "/api/v1/admin/seeds/{seed_name}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Registers a seed from its kubeconfig.
    pub async fn create_seed(
        &self,
        params: CreateSeedParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Seed, OperationError<CreateSeedError>> {
        let operation =
            ClientOperation::new("createSeed", RestMethod::Post, "/api/v1/admin/seeds", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn update_seed(
        &self,
        params: UpdateSeedParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Seed, OperationError<UpdateSeedError>> {
        let operation = ClientOperation::new(
            "updateSeed",
            RestMethod::Patch,
            "/api/v1/admin/seeds/{seed_name}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn delete_seed(
        &self,
        params: DeleteSeedParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<DeleteSeedError>> {
        let operation = ClientOperation::new(
            "deleteSeed",
            RestMethod::Delete,
            "/api/v1/admin/seeds/{seed_name}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
