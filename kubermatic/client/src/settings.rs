//! The current user's dashboard settings.

use std::sync::Arc;

use kubermatic_models::UserSettings;
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `getCurrentUserSettings`.
    pub struct GetCurrentUserSettingsParams {}
}

operation_params! {
    /// Parameters of `patchCurrentUserSettings`.
    pub struct PatchCurrentUserSettingsParams {
        /// JSON merge patch applied to the stored settings.
        body patch: serde_json::Value = "Patch" => with_patch, set_patch;
    }
}

operation_outcome! {
    /// Failures of `getCurrentUserSettings`.
    pub enum GetCurrentUserSettingsError("getCurrentUserSettings") {
        200 => UserSettings;
        401 => Unauthorized,
    }
}

operation_outcome! {
    /// Failures of `patchCurrentUserSettings`.
    pub enum PatchCurrentUserSettingsError("patchCurrentUserSettings") {
        200 => UserSettings;
        401 => Unauthorized,
    }
}

#[derive(Debug, Clone)]
pub struct SettingsClient {
    core: ClientCore,
}

impl SettingsClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn get_current_user_settings(
        &self,
        params: GetCurrentUserSettingsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<UserSettings, OperationError<GetCurrentUserSettingsError>> {
        let operation = ClientOperation::new(
            "getCurrentUserSettings",
            RestMethod::Get,
            "/api/v1/me/settings",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn patch_current_user_settings(
        &self,
        params: PatchCurrentUserSettingsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<UserSettings, OperationError<PatchCurrentUserSettingsError>> {
        let operation = ClientOperation::new(
            "patchCurrentUserSettings",
            RestMethod::Patch,
            "/api/v1/me/settings",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
