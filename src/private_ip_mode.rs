//! Private IP mode
//!
//! The project-level toggle controlling whether cluster endpoints expose
//! private IP addressing. One PATCH endpoint, no identifier, singleton per
//! project.

use serde::{Deserialize, Serialize};

use crate::client::AtlasClient;
use crate::error::{ApiResponse, Result};
use crate::http;

/// The private IP mode setting of a project.
///
/// `enabled` always serializes: disabling must send an explicit `false`, not
/// an absent field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateIpModeSetting {
    pub enabled: bool,
}

/// Client for the project `privateIpMode` endpoint.
#[derive(Debug, Clone)]
pub struct PrivateIpMode {
    client: AtlasClient,
}

impl PrivateIpMode {
    pub(crate) fn new(client: AtlasClient) -> Self {
        Self { client }
    }

    /// Turn on private IP mode for a project.
    ///
    /// https://docs.atlas.mongodb.com/reference/api/set-private-ip-mode-for-project/
    pub async fn enable(&self, gid: &str) -> Result<ApiResponse<PrivateIpModeSetting>> {
        self.set(gid, true).await
    }

    /// Turn off private IP mode for a project.
    ///
    /// https://docs.atlas.mongodb.com/reference/api/set-private-ip-mode-for-project/
    pub async fn disable(&self, gid: &str) -> Result<ApiResponse<PrivateIpModeSetting>> {
        self.set(gid, false).await
    }

    async fn set(&self, gid: &str, enabled: bool) -> Result<ApiResponse<PrivateIpModeSetting>> {
        let url = self.client.group_url(&[gid, "privateIpMode"])?;
        http::patch(&self.client, url, &PrivateIpModeSetting { enabled }).await
    }
}
