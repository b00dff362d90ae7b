use std::sync::Arc;

use kubermatic_models::{EksCluster, EksSecurityGroup, EksSubnet, EksVpc};
use kubermatic_runtime::{
    AuthInfoWriter, ClientOperation, ClientTransport, Formats, OperationError, RestMethod,
};

use crate::core::ClientCore;

operation_params! {
    /// Parameters of `validateEKSCredentials`.
    pub struct ValidateEksCredentialsParams {
        header access_key_id: String = "AccessKeyID" => with_access_key_id, set_access_key_id;
        header secret_access_key: String = "SecretAccessKey" => with_secret_access_key, set_secret_access_key;
        header credential: String = "Credential" => with_credential, set_credential;
        header region: String = "Region" => with_region, set_region;
    }
}

operation_params! {
    /// Parameters of `listEKSRegions`.
    pub struct ListEksRegionsParams {
        header access_key_id: String = "AccessKeyID" => with_access_key_id, set_access_key_id;
        header secret_access_key: String = "SecretAccessKey" => with_secret_access_key, set_secret_access_key;
        header credential: String = "Credential" => with_credential, set_credential;
    }
}

operation_params! {
    /// Parameters of `listEKSVPCS`.
    pub struct ListEksVpcsParams {
        header access_key_id: String = "AccessKeyID" => with_access_key_id, set_access_key_id;
        header secret_access_key: String = "SecretAccessKey" => with_secret_access_key, set_secret_access_key;
        header credential: String = "Credential" => with_credential, set_credential;
        header region: String = "Region" => with_region, set_region;
    }
}

operation_params! {
    /// Parameters of `listEKSSubnets`.
    pub struct ListEksSubnetsParams {
        header access_key_id: String = "AccessKeyID" => with_access_key_id, set_access_key_id;
        header secret_access_key: String = "SecretAccessKey" => with_secret_access_key, set_secret_access_key;
        header credential: String = "Credential" => with_credential, set_credential;
        header region: String = "Region" => with_region, set_region;
        header vpc_id: String = "VpcId" => with_vpc_id, set_vpc_id;
    }
}

operation_params! {
    /// Parameters of `listEKSSecurityGroups`.
    pub struct ListEksSecurityGroupsParams {
        header access_key_id: String = "AccessKeyID" => with_access_key_id, set_access_key_id;
        header secret_access_key: String = "SecretAccessKey" => with_secret_access_key, set_secret_access_key;
        header credential: String = "Credential" => with_credential, set_credential;
        header region: String = "Region" => with_region, set_region;
        header vpc_id: String = "VpcId" => with_vpc_id, set_vpc_id;
    }
}

operation_params! {
    /// Parameters of `listEKSClusters`.
    pub struct ListEksClustersParams {
        path project_id: String = "project_id" => with_project_id, set_project_id;
        header access_key_id: String = "AccessKeyID" => with_access_key_id, set_access_key_id;
        header secret_access_key: String = "SecretAccessKey" => with_secret_access_key, set_secret_access_key;
        header credential: String = "Credential" => with_credential, set_credential;
        header region: String = "Region" => with_region, set_region;
    }
}

operation_outcome! {
    /// Failures of `validateEKSCredentials`.
    pub enum ValidateEksCredentialsError("validateEKSCredentials") {
        200 => empty;
    }
}

operation_outcome! {
    /// Failures of `listEKSRegions`.
    pub enum ListEksRegionsError("listEKSRegions") {
        200 => Vec<String>;
    }
}

operation_outcome! {
    /// Failures of `listEKSVPCS`.
    pub enum ListEksVpcsError("listEKSVPCS") {
        200 => Vec<EksVpc>;
    }
}

operation_outcome! {
    /// Failures of `listEKSSubnets`.
    pub enum ListEksSubnetsError("listEKSSubnets") {
        200 => Vec<EksSubnet>;
    }
}

operation_outcome! {
    /// Failures of `listEKSSecurityGroups`.
    pub enum ListEksSecurityGroupsError("listEKSSecurityGroups") {
        200 => Vec<EksSecurityGroup>;
    }
}

operation_outcome! {
    /// Failures of `listEKSClusters`.
    pub enum ListEksClustersError("listEKSClusters") {
        200 => Vec<EksCluster>;
    }
}

/// Amazon EKS lookups.
#[derive(Debug, Clone)]
pub struct EksClient {
    core: ClientCore,
}

impl EksClient {
    pub fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self {
            core: ClientCore::new(transport, formats),
        }
    }

    pub fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.core.set_transport(transport);
    }

    pub async fn validate_eks_credentials(
        &self,
        params: ValidateEksCredentialsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<(), OperationError<ValidateEksCredentialsError>> {
        let operation = ClientOperation::new(
            "validateEKSCredentials",
            RestMethod::Get,
            "/api/v2/providers/eks/validatecredentials",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_eks_regions(
        &self,
        params: ListEksRegionsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<String>, OperationError<ListEksRegionsError>> {
        let operation = ClientOperation::new(
            "listEKSRegions",
            RestMethod::Get,
            "/api/v2/providers/eks/regions",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_eks_vpcs(
        &self,
        params: ListEksVpcsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<EksVpc>, OperationError<ListEksVpcsError>> {
        let operation =
            ClientOperation::new("listEKSVPCS", RestMethod::Get, "/api/v2/providers/eks/vpcs", &params)
                .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_eks_subnets(
        &self,
        params: ListEksSubnetsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<EksSubnet>, OperationError<ListEksSubnetsError>> {
        let operation = ClientOperation::new(
            "listEKSSubnets",
            RestMethod::Get,
            "/api/v2/providers/eks/subnets",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_eks_security_groups(
        &self,
        params: ListEksSecurityGroupsParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<EksSecurityGroup>, OperationError<ListEksSecurityGroupsError>> {
        let operation = ClientOperation::new(
            "listEKSSecurityGroups",
            RestMethod::Get,
            "/api/v2/providers/eks/securitygroups",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }

    pub async fn list_eks_clusters(
        &self,
        params: ListEksClustersParams,
        auth: Option<&dyn AuthInfoWriter>,
    ) -> Result<Vec<EksCluster>, OperationError<ListEksClustersError>> {
        let operation = ClientOperation::new(
            "listEKSClusters",
            RestMethod::Get,
            "/api/v2/projects/{project_id}/providers/eks/clusters",
            &params,
        )
        .auth(auth);
        self.core.submit(operation).await
    }
}
