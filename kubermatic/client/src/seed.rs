//! Seed lookups open to regular users.

use std::sync::Arc;

use kubermatic_models::SeedSettings;
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `listSeedNames`.
    pub struct ListSeedNamesParams {}
}

operation_params! {
    /// Parameters of `getSeedSettings`.
    pub struct GetSeedSettingsParams {
        path seed_name: String = "seed_name" => with_seed_name, set_seed_name;
    }
}

operation_outcome! {
    /// Failures of `listSeedNames`.
    pub enum ListSeedNamesError("listSeedNames") {
        200 => Vec<String>;
    }
}

operation_outcome! {
    /// Failures of `getSeedSettings`.
    pub enum GetSeedSettingsError("getSeedSettings") {
        200 => SeedSettings;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

/// Seed names and seed-level settings.
#[derive(Debug, Clone)]
pub struct SeedClient {
    core: ClientCore,
}

impl SeedClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    /// Names of all seeds, in the order the server returns them.
    pub async fn list_seed_names(
        &self,
        params: ListSeedNamesParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<String>, OperationError<ListSeedNamesError>> {
        let operation =
            ClientOperation::new("listSeedNames", RestMethod::Get, "/api/v1/seed", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn get_seed_settings(
        &self,
        params: GetSeedSettingsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<SeedSettings, OperationError<GetSeedSettingsError>> {
        let operation = ClientOperation::new(
            "getSeedSettings",
            RestMethod::Get,
            "/api/v2/seeds/{seed_name}/settings",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
