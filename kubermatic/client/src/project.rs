//! Projects.

use std::sync::Arc;

use kubermatic_models::{ErrorResponse, Project, ProjectBody};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

// =============================================================================
// Parameters
// =============================================================================

operation_params! {
    /// Parameters of `listProjects`.
    pub struct ListProjectsParams {
        /// Administrators only: list every project, not just their own.
        query display_all: bool = "displayAll" => with_display_all, set_display_all;
    }
}

operation_params! {
    /// Parameters of `getProject`.
    pub struct GetProjectParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
    }
}

operation_params! {
    /// Parameters of `createProject`.
    pub struct CreateProjectParams {
        body body: ProjectBody = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `updateProject`.
    pub struct UpdateProjectParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        body body: Project = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `deleteProject`.
    pub struct DeleteProjectParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
    }
}

// =============================================================================
// Outcomes
// =============================================================================

operation_outcome! {
    /// Failures of `listProjects`.
    pub enum ListProjectsError("listProjects") {
        200 => Vec<Project>;
        401 => Unauthorized,
        409 => Conflict,
    }
}

operation_outcome! {
    /// Failures of `getProject`.
    pub enum GetProjectError("getProject") {
        200 => Project;
        401 => Unauthorized,
        409 => Conflict,
    }
}

operation_outcome! {
    /// Failures of `createProject`.
    pub enum CreateProjectError("createProject") {
        201 => Project;
        401 => Unauthorized,
        409 => Conflict,
    }
}

operation_outcome! {
    /// Failures of `updateProject`.
    pub enum UpdateProjectError("updateProject") {
        200 => Project;
        400 => BadRequest,
        404 => NotFound,
        500 => InternalServerError(ErrorResponse),
        501 => NotImplemented,
    }
}

operation_outcome! {
    /// Failures of `deleteProject`.
    pub enum DeleteProjectError("deleteProject") {
        200 => empty;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

// =============================================================================
// Facade
// =============================================================================

#[derive(Debug, Clone)]
pub struct ProjectClient {
    core: ClientCore,
}

impl ProjectClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    /// Projects visible to the caller.
    pub async fn list_projects(
        &self,
        params: ListProjectsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<Project>, OperationError<ListProjectsError>> {
        let operation =
            ClientOperation::new("listProjects", RestMethod::Get, "/api/v1/projects", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn get_project(
        &self,
        params: GetProjectParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Project, OperationError<GetProjectError>> {
        let operation = ClientOperation::new(
            "getProject",
            RestMethod::Get,
            "/api/v1/projects/{project_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Creates a project owned by the caller.
    pub async fn create_project(
        &self,
        params: CreateProjectParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Project, OperationError<CreateProjectError>> {
        let operation =
            ClientOperation::new("createProject", RestMethod::Post, "/api/v1/projects", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    /// Replaces the project's name and labels.
    pub async fn update_project(
        &self,
        params: UpdateProjectParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Project, OperationError<UpdateProjectError>> {
        let operation = ClientOperation::new(
            "updateProject",
            RestMethod::Put,
            "/api/v1/projects/{project_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn delete_project(
        &self,
        params: DeleteProjectParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<DeleteProjectError>> {
        let operation = ClientOperation::new(
            "deleteProject",
            RestMethod::Delete,
            "/api/v1/projects/{project_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
