//! Atlas client
//!
//! Main entry point for the crate: holds the shared HTTP client and an
//! immutable configuration, builds group-scoped URLs, and hands out the
//! per-resource clients.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use crate::auth::Credentials;
use crate::containers::Containers;
use crate::error::Result;
use crate::private_ip_mode::PrivateIpMode;

/// Official Atlas API v1.0 root.
pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com/api/atlas/v1.0/";

const DEFAULT_USER_AGENT: &str = concat!("atlas-peering/", env!("CARGO_PKG_VERSION"));

/// Immutable configuration shared by all clones of a client.
#[derive(Debug)]
struct ClientConfig {
    base_url: Url,
    credentials: Option<Credentials>,
}

/// Shared Atlas API client.
///
/// Cloning is cheap: all clones share one connection pool and one immutable
/// configuration, so a client may be used freely across tasks. Nothing is
/// mutated after [`ClientBuilder::build`].
#[derive(Debug, Clone)]
pub struct AtlasClient {
    http: Client,
    config: Arc<ClientConfig>,
}

impl AtlasClient {
    /// Start building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Client against the official API root with the given credentials.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder().credentials(credentials).build()
    }

    /// Network container endpoints.
    pub fn containers(&self) -> Containers {
        Containers::new(self.clone())
    }

    /// Project private IP mode endpoint.
    pub fn private_ip_mode(&self) -> PrivateIpMode {
        PrivateIpMode::new(self.clone())
    }

    /// Build a URL under `groups/` from caller-supplied path segments.
    ///
    /// Segments are percent-encoded, so an id containing `/` or `?` cannot
    /// escape its position in the path.
    pub(crate) fn group_url(&self, segments: &[&str]) -> Result<Url> {
        let mut path = String::from("groups/");
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                path.push('/');
            }
            path.push_str(&urlencoding::encode(segment));
        }
        Ok(self.config.base_url.join(&path)?)
    }

    /// Request builder for `url` with credentials applied.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.http.request(method, url);
        match &self.config.credentials {
            Some(credentials) => credentials.apply(request),
            None => request,
        }
    }
}

/// Builder for [`AtlasClient`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Override the API root. Useful for mock servers and private regions.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Credentials applied to every request. Omitting them builds an
    /// anonymous client, which mock-server tests rely on.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Whole-request timeout. No timeout is set by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AtlasClient> {
        let mut base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        // Url::join drops the last path segment unless it ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut http = Client::builder().user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(AtlasClient {
            http: http.build()?,
            config: Arc::new(ClientConfig {
                base_url,
                credentials: self.credentials,
            }),
        })
    }
}
