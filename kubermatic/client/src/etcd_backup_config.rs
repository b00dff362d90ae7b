//! Etcd backup schedules.

use std::sync::Arc;

use kubermatic_models::{
    EtcdBackupConfig, EtcdBackupConfigBody, EtcdBackupConfigList, EtcdBackupConfigSpec,
};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

// =============================================================================
// Parameters
// =============================================================================

operation_params! {
    /// Parameters of `createEtcdBackupConfig`.
    pub struct CreateEtcdBackupConfigParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        body body: EtcdBackupConfigBody = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `listEtcdBackupConfig`.
    pub struct ListEtcdBackupConfigParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
    }
}

operation_params! {
    /// Parameters of `getEtcdBackupConfig`.
    pub struct GetEtcdBackupConfigParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        path ebc_id: String = "ebc_id" => with_ebc_id, set_ebc_id;
    }
}

operation_params! {
    /// Parameters of `patchEtcdBackupConfig`.
    pub struct PatchEtcdBackupConfigParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        path ebc_id: String = "ebc_id" => with_ebc_id, set_ebc_id;
        body body: EtcdBackupConfigSpec = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `deleteEtcdBackupConfig`.
    pub struct DeleteEtcdBackupConfigParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path cluster_id: String = "cluster_id" => with_cluster_id, set_cluster_id;
        path ebc_id: String = "ebc_id" => with_ebc_id, set_ebc_id;
    }
}

operation_params! {
    /// Parameters of `listProjectEtcdBackupConfig`.
    pub struct ListProjectEtcdBackupConfigParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        /// `automatic` or `snapshot`; unset lists both.
        query kind: String = "type" => with_kind, set_kind;
    }
}

// =============================================================================
// Outcomes
// =============================================================================

operation_outcome! {
    /// Failures of `createEtcdBackupConfig`.
    pub enum CreateEtcdBackupConfigError("createEtcdBackupConfig") {
        201 => EtcdBackupConfig;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `listEtcdBackupConfig`.
    pub enum ListEtcdBackupConfigError("listEtcdBackupConfig") {
        200 => Vec<EtcdBackupConfig>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `getEtcdBackupConfig`.
    pub enum GetEtcdBackupConfigError("getEtcdBackupConfig") {
        200 => EtcdBackupConfig;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `patchEtcdBackupConfig`.
    pub enum PatchEtcdBackupConfigError("patchEtcdBackupConfig") {
        200 => EtcdBackupConfig;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `deleteEtcdBackupConfig`.
    pub enum DeleteEtcdBackupConfigError("deleteEtcdBackupConfig") {
        200 => empty;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `listProjectEtcdBackupConfig`.
    pub enum ListProjectEtcdBackupConfigError("listProjectEtcdBackupConfig") {
        200 => Vec<EtcdBackupConfigList>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

// =============================================================================
// Facade
// =============================================================================

#[derive(Debug, Clone)]
pub struct EtcdBackupConfigClient {
    core: ClientCore,
}

impl EtcdBackupConfigClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn create_etcd_backup_config(
        &self,
        params: CreateEtcdBackupConfigParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<EtcdBackupConfig, OperationError<CreateEtcdBackupConfigError>> {
        let operation = ClientOperation::new(
            "createEtcdBackupConfig",
            RestMethod::Post,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/etcdbackupconfigs",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_etcd_backup_config(
        &self,
        params: ListEtcdBackupConfigParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<EtcdBackupConfig>, OperationError<ListEtcdBackupConfigError>> {
        let operation = ClientOperation::new(
            "listEtcdBackupConfig",
            RestMethod::Get,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/etcdbackupconfigs",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn get_etcd_backup_config(
        &self,
        params: GetEtcdBackupConfigParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<EtcdBackupConfig, OperationError<GetEtcdBackupConfigError>> {
        let operation = ClientOperation::new(
            "getEtcdBackupConfig",
            RestMethod::Get,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/etcdbackupconfigs/{ebc_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Replaces the schedule, retention and destination.
    pub async fn patch_etcd_backup_config(
        &self,
        params: PatchEtcdBackupConfigParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<EtcdBackupConfig, OperationError<PatchEtcdBackupConfigError>> {
        let operation = ClientOperation::new(
            "patchEtcdBackupConfig",
            RestMethod::Patch,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/etcdbackupconfigs/{ebc_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn delete_etcd_backup_config(
        &self,
        params: DeleteEtcdBackupConfigParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<DeleteEtcdBackupConfigError>> {
        let operation = ClientOperation::new(
            "deleteEtcdBackupConfig",
            RestMethod::Delete,
            "/api/v2/projects/{project_id}/clusters/{cluster_id}/etcdbackupconfigs/{ebc_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Backup configurations across every cluster of a project, grouped per cluster.
    pub async fn list_project_etcd_backup_config(
        &self,
        params: ListProjectEtcdBackupConfigParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<EtcdBackupConfigList>, OperationError<ListProjectEtcdBackupConfigError>> {
        let operation = ClientOperation::new(
            "listProjectEtcdBackupConfig",
            RestMethod::Get,
            "/api/v2/projects/{project_id}/etcdbackupconfigs",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
