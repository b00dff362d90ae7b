//! Typed async client for the Kubermatic Kubernetes Platform REST API.
//!
//! Operations are grouped by resource into facades (admin, projects, seeds,
//! cloud providers and so on). [`KubermaticApi`] owns one of each and shares a
//! single transport and format registry between them.
//!
//! Every operation follows the same shape: build its parameter struct, call the
//! facade method with optional per-call credentials, and match on the result.
//! Declared failures come back as the operation's own error enum; anything the
//! operation does not declare lands in its `Default` variant.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kubermatic_client::KubermaticApi;
//! use kubermatic_client::project::ListProjectsParams;
//! use kubermatic_runtime::{BearerToken, TransportConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = KubermaticApi::with_config(TransportConfig::from_env())?;
//! let token = BearerToken::from_env()?;
//!
//! let projects = api
//!     .project()
//!     .list_projects(ListProjectsParams::new().with_display_all(true), Some(&token))
//!     .await?;
//! for project in &projects {
//!     println!("{} {}", project.id, project.name);
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod core;

pub mod addon;
pub mod admin;
pub mod etcd_backup_config;
pub mod ipam_pool;
pub mod project;
pub mod providers;
pub mod seed;
pub mod service_accounts;
pub mod settings;
pub mod tokens;
pub mod users;

use std::sync::Arc;

pub use kubermatic_models as models;
use kubermatic_models::ErrorResponse;
use kubermatic_runtime::{ApiError, ClientTransport, Formats, HttpTransport, TransportConfig};

pub use addon::AddonClient;
pub use admin::AdminClient;
pub use etcd_backup_config::EtcdBackupConfigClient;
pub use ipam_pool::IpamPoolClient;
pub use project::ProjectClient;
pub use providers::{
    AksClient, AlibabaClient, AnexiaClient, AzureClient, EksClient, GcpClient, GkeClient,
};
pub use seed::SeedClient;
pub use service_accounts::ServiceAccountsClient;
pub use settings::SettingsClient;
pub use tokens::TokensClient;
pub use users::UsersClient;

/// Response for a status code an operation does not declare.
///
/// The platform reports errors as an [`ErrorResponse`] envelope, so that is
/// what the body is decoded into.
pub type DefaultResponse = kubermatic_runtime::DefaultResponse<ErrorResponse>;

/// The whole API surface behind one transport.
#[derive(Debug, Clone)]
pub struct KubermaticApi {
    transport: Arc<dyn ClientTransport>,
    formats: Arc<Formats>,
    addon: AddonClient,
    admin: AdminClient,
    aks: AksClient,
    alibaba: AlibabaClient,
    anexia: AnexiaClient,
    azure: AzureClient,
    eks: EksClient,
    etcd_backup_config: EtcdBackupConfigClient,
    gcp: GcpClient,
    gke: GkeClient,
    ipam_pool: IpamPoolClient,
    project: ProjectClient,
    seed: SeedClient,
    service_accounts: ServiceAccountsClient,
    settings: SettingsClient,
    tokens: TokensClient,
    users: UsersClient,
}

impl KubermaticApi {
    /// Wires every facade to `transport` and `formats`.
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            addon: AddonClient::new(transport.clone(), formats.clone()),
            admin: AdminClient::new(transport.clone(), formats.clone()),
            aks: AksClient::new(transport.clone(), formats.clone()),
            alibaba: AlibabaClient::new(transport.clone(), formats.clone()),
            anexia: AnexiaClient::new(transport.clone(), formats.clone()),
            azure: AzureClient::new(transport.clone(), formats.clone()),
            eks: EksClient::new(transport.clone(), formats.clone()),
            etcd_backup_config: EtcdBackupConfigClient::new(transport.clone(), formats.clone()),
            gcp: GcpClient::new(transport.clone(), formats.clone()),
            gke: GkeClient::new(transport.clone(), formats.clone()),
            ipam_pool: IpamPoolClient::new(transport.clone(), formats.clone()),
            project: ProjectClient::new(transport.clone(), formats.clone()),
            seed: SeedClient::new(transport.clone(), formats.clone()),
            service_accounts: ServiceAccountsClient::new(transport.clone(), formats.clone()),
            settings: SettingsClient::new(transport.clone(), formats.clone()),
            tokens: TokensClient::new(transport.clone(), formats.clone()),
            users: UsersClient::new(transport.clone(), formats.clone()),
            transport,
            formats,
        }
    }

    /// HTTP transport for `config` with the default format registry.
    pub fn with_config(config: TransportConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), Arc::new(Formats::default())))
    }

    /// HTTP transport on the compiled-in host, base path and schemes.
    pub fn try_default() -> Result<Self, ApiError> {
        Self::with_config(TransportConfig::default())
    }

    /// Swaps the transport of the root and of every facade.
    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.addon.set_transport(transport.clone());
        self.admin.set_transport(transport.clone());
        self.aks.set_transport(transport.clone());
        self.alibaba.set_transport(transport.clone());
        self.anexia.set_transport(transport.clone());
        self.azure.set_transport(transport.clone());
        self.eks.set_transport(transport.clone());
        self.etcd_backup_config.set_transport(transport.clone());
        self.gcp.set_transport(transport.clone());
        self.gke.set_transport(transport.clone());
        self.ipam_pool.set_transport(transport.clone());
        self.project.set_transport(transport.clone());
        self.seed.set_transport(transport.clone());
        self.service_accounts.set_transport(transport.clone());
        self.settings.set_transport(transport.clone());
        self.tokens.set_transport(transport.clone());
        self.users.set_transport(transport.clone());
        self.transport = transport;
    }

    pub fn transport(&self) -> &Arc<dyn ClientTransport> {
        &self.transport
    }

    pub fn formats(&self) -> &Arc<Formats> {
        &self.formats
    }

    pub fn addon(&self) -> &AddonClient {
        &self.addon
    }

    pub fn admin(&self) -> &AdminClient {
        &self.admin
    }

    pub fn aks(&self) -> &AksClient {
        &self.aks
    }

    pub fn alibaba(&self) -> &AlibabaClient {
        &self.alibaba
    }

    pub fn anexia(&self) -> &AnexiaClient {
        &self.anexia
    }

    pub fn azure(&self) -> &AzureClient {
        &self.azure
    }

    pub fn eks(&self) -> &EksClient {
        &self.eks
    }

    pub fn etcd_backup_config(&self) -> &EtcdBackupConfigClient {
        &self.etcd_backup_config
    }

    pub fn gcp(&self) -> &GcpClient {
        &self.gcp
    }

    pub fn gke(&self) -> &GkeClient {
        &self.gke
    }

    pub fn ipam_pool(&self) -> &IpamPoolClient {
        &self.ipam_pool
    }

    pub fn project(&self) -> &ProjectClient {
        &self.project
    }

    pub fn seed(&self) -> &SeedClient {
        &self.seed
    }

    pub fn service_accounts(&self) -> &ServiceAccountsClient {
        &self.service_accounts
    }

    pub fn settings(&self) -> &SettingsClient {
        &self.settings
    }

    pub fn tokens(&self) -> &TokensClient {
        &self.tokens
    }

    pub fn users(&self) -> &UsersClient {
        &self.users
    }
}
