//! Network containers
//!
//! Methods for the Atlas network container endpoints: the per-project
//! network allocations that a cloud provider VPC peers with. Every method
//! takes the group (project) id first and performs exactly one request.

use serde::{Deserialize, Serialize};

use crate::client::AtlasClient;
use crate::error::{ApiResponse, Result};
use crate::http;

/// An Atlas network container.
///
/// Every field is optional on the wire and omitted when unset; `id` is
/// absent until the container has been created server-side. `vpc_id` is
/// populated for AWS containers, `gcp_project_id`/`network_name` for GCP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Cloud provider, `AWS` or `GCP`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// CIDR block Atlas allocates for the container network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atlas_cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    /// Whether the provider-side network has been provisioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned: Option<bool>,
}

/// Envelope for [`Containers::list`]: one page of containers plus the total
/// count reported by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerList {
    pub results: Vec<Container>,
    pub total_count: u64,
}

/// Client for the network container endpoints of an Atlas project.
///
/// Obtained from [`AtlasClient::containers`]; holds a clone of the shared
/// client and no other state.
#[derive(Debug, Clone)]
pub struct Containers {
    client: AtlasClient,
}

impl Containers {
    pub(crate) fn new(client: AtlasClient) -> Self {
        Self { client }
    }

    /// List the containers of a project, filtered by provider name.
    ///
    /// https://docs.atlas.mongodb.com/reference/api/vpc-get-containers-list/
    pub async fn list(&self, gid: &str, provider_name: &str) -> Result<ApiResponse<ContainerList>> {
        let mut url = self.client.group_url(&[gid, "containers"])?;
        url.query_pairs_mut()
            .append_pair("providerName", provider_name);
        http::get(&self.client, url).await
    }

    /// Get one container by id.
    ///
    /// https://docs.atlas.mongodb.com/reference/api/vpc-get-container/
    pub async fn get(&self, gid: &str, container_id: &str) -> Result<ApiResponse<Container>> {
        let url = self.client.group_url(&[gid, "containers", container_id])?;
        http::get(&self.client, url).await
    }

    /// Create a container. `params.id` must be unset; the returned container
    /// carries the server-assigned id.
    ///
    /// https://docs.atlas.mongodb.com/reference/api/vpc-create-container/
    pub async fn create(&self, gid: &str, params: &Container) -> Result<ApiResponse<Container>> {
        let url = self.client.group_url(&[gid, "containers"])?;
        http::post(&self.client, url, params).await
    }

    /// Update a container. Unset fields are omitted from the request body,
    /// so the server leaves them unchanged.
    ///
    /// https://docs.atlas.mongodb.com/reference/api/vpc-update-container/
    pub async fn update(
        &self,
        gid: &str,
        container_id: &str,
        params: &Container,
    ) -> Result<ApiResponse<Container>> {
        let url = self.client.group_url(&[gid, "containers", container_id])?;
        http::patch(&self.client, url, params).await
    }

    /// Delete a container. Only the response status is reported.
    pub async fn delete(&self, gid: &str, container_id: &str) -> Result<ApiResponse<()>> {
        let url = self.client.group_url(&[gid, "containers", container_id])?;
        http::delete(&self.client, url).await
    }
}
