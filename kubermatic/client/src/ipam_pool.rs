//! IPAM pools. Administrator only.

use std::sync::Arc;

use kubermatic_models::{ErrorResponse, IpamPool};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `listIPAMPools`.
    pub struct ListIpamPoolsParams {}
}

operation_params! {
    /// Parameters of `getIPAMPool`.
    pub struct GetIpamPoolParams {
        path name: String = "ipampool_name" => with_name, set_name;
    }
}

operation_params! {
    /// Parameters of `createIPAMPool`.
    pub struct CreateIpamPoolParams {
        body body: IpamPool = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `patchIPAMPool`.
    pub struct PatchIpamPoolParams {
        path name: String = "ipampool_name" => with_name, set_name;
        body body: IpamPool = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `deleteIPAMPool`.
    pub struct DeleteIpamPoolParams {
        path name: String = "ipampool_name" => with_name, set_name;
    }
}

operation_outcome! {
    /// Failures of `listIPAMPools`.
    pub enum ListIpamPoolsError("listIPAMPools") {
        200 => Vec<IpamPool>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `getIPAMPool`.
    pub enum GetIpamPoolError("getIPAMPool") {
        200 => IpamPool;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `createIPAMPool`.
    pub enum CreateIpamPoolError("createIPAMPool") {
        201 => empty;
        401 => Unauthorized,
        403 => Forbidden,
        409 => Conflict(ErrorResponse),
    }
}

operation_outcome! {
    /// Failures of `patchIPAMPool`.
    pub enum PatchIpamPoolError("patchIPAMPool") {
        200 => empty;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `deleteIPAMPool`.
    pub enum DeleteIpamPoolError("deleteIPAMPool") {
        200 => empty;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

#[derive(Debug, Clone)]
pub struct IpamPoolClient {
    core: ClientCore,
}

impl IpamPoolClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn list_ipam_pools(
        &self,
        params: ListIpamPoolsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<IpamPool>, OperationError<ListIpamPoolsError>> {
        let operation =
            ClientOperation::new("listIPAMPools", RestMethod::Get, "/api/v2/ipampools", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn get_ipam_pool(
        &self,
        params: GetIpamPoolParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<IpamPool, OperationError<GetIpamPoolError>> {
        let operation = ClientOperation::new(
            "getIPAMPool",
            RestMethod::Get,
            "/api/v2/ipampools/{ipampool_name}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Creates a pool. The server answers with an empty object, so nothing is decoded.
    ///
    /// A pool that already exists fails with
    /// [`CreateIpamPoolError::Conflict`] carrying the server's message.
    pub async fn create_ipam_pool(
        &self,
        params: CreateIpamPoolParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<CreateIpamPoolError>> {
        let operation =
            ClientOperation::new("createIPAMPool", RestMethod::Post, "/api/v2/ipampools", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn patch_ipam_pool(
        &self,
        params: PatchIpamPoolParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<PatchIpamPoolError>> {
        let operation = ClientOperation::new(
            "patchIPAMPool",
            RestMethod::Patch,
            "/api/v2/ipampools/{ipampool_name}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn delete_ipam_pool(
        &self,
        params: DeleteIpamPoolParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<DeleteIpamPoolError>> {
        let operation = ClientOperation::new(
            "deleteIPAMPool",
            RestMethod::Delete,
            "/api/v2/ipampools/{ipampool_name}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
