//! The current user and project membership.

use std::sync::Arc;

use kubermatic_models::User;
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

// =============================================================================
// Parameters
// =============================================================================

operation_params! {
    /// Parameters of `getCurrentUser`.
    pub struct GetCurrentUserParams {}
}

operation_params! {
    /// Parameters of `logoutCurrentUser`.
    pub struct LogoutCurrentUserParams {}
}

operation_params! {
    /// Parameters of `addUserToProject`.
    pub struct AddUserToProjectParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        body body: User = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `getUsersForProject`.
    pub struct GetUsersForProjectParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
    }
}

operation_params! {
    /// Parameters of `editUserInProject`.
    pub struct EditUserInProjectParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path user_id: String = "user_id" => with_user_id, set_user_id;
        body body: User = "Body" => with_body, set_body;
    }
}

operation_params! {
    /// Parameters of `deleteUserFromProject`.
    pub struct DeleteUserFromProjectParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        path user_id: String = "user_id" => with_user_id, set_user_id;
    }
}

// =============================================================================
// Outcomes
// =============================================================================

operation_outcome! {
    /// Failures of `getCurrentUser`.
    pub enum GetCurrentUserError("getCurrentUser") {
        200 => User;
        401 => Unauthorized,
    }
}

operation_outcome! {
    /// Failures of `logoutCurrentUser`.
    pub enum LogoutCurrentUserError("logoutCurrentUser") {
        200 => empty;
        401 => Unauthorized,
    }
}

operation_outcome! {
    /// Failures of `addUserToProject`.
    pub enum AddUserToProjectError("addUserToProject") {
        201 => User;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `getUsersForProject`.
    pub enum GetUsersForProjectError("getUsersForProject") {
        200 => Vec<User>;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `editUserInProject`.
    pub enum EditUserInProjectError("editUserInProject") {
        200 => User;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

operation_outcome! {
    /// Failures of `deleteUserFromProject`.
    pub enum DeleteUserFromProjectError("deleteUserFromProject") {
        200 => User;
        401 => Unauthorized,
        403 => Forbidden,
    }
}

// =============================================================================
// Facade
// =============================================================================

/// The signed-in user and the members of projects.
#[derive(Debug, Clone)]
pub struct UsersClient {
    core: ClientCore,
}

impl UsersClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    /// The user the credentials belong to.
    pub async fn get_current_user(
        &self,
        params: GetCurrentUserParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<User, OperationError<GetCurrentUserError>> {
        let operation =
            ClientOperation::new("getCurrentUser", RestMethod::Get, "/api/v1/me", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    /// Revokes the token used for this call.
    pub async fn logout_current_user(
        &self,
        params: LogoutCurrentUserParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<LogoutCurrentUserError>> {
        let operation = ClientOperation::new(
            "logoutCurrentUser",
            RestMethod::Post,
            "/api/v1/me/logout",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn add_user_to_project(
        &self,
        params: AddUserToProjectParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<User, OperationError<AddUserToProjectError>> {
        let operation = ClientOperation::new(
            "addUserToProject",
            RestMethod::Post,
            "/api/v1/projects/{project_id}/users",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn get_users_for_project(
        &self,
        params: GetUsersForProjectParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<User>, OperationError<GetUsersForProjectError>> {
        let operation = ClientOperation::new(
            "getUsersForProject",
            RestMethod::Get,
            "/api/v1/projects/{project_id}/users",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Changes the group a member holds in the project.
    pub async fn edit_user_in_project(
        &self,
        params: EditUserInProjectParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<User, OperationError<EditUserInProjectError>> {
        let operation = ClientOperation::new(
            "editUserInProject",
            RestMethod::Put,
            "/api/v1/projects/{project_id}/users/{user_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    /// Removes a member and returns the user as it was.
    pub async fn delete_user_from_project(
        &self,
        params: DeleteUserFromProjectParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<User, OperationError<DeleteUserFromProjectError>> {
        let operation = ClientOperation::new(
            "deleteUserFromProject",
            RestMethod::Delete,
            "/api/v1/projects/{project_id}/users/{user_id}",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
