//! Credential schemes for Atlas API requests.
//!
//! Atlas programmatic access uses an API key pair; bearer tokens cover
//! service-account deployments. Credentials are applied when each request
//! builder is constructed and are never written into the shared client's
//! default headers.

use std::fmt;

use reqwest::RequestBuilder;

/// Credentials attached to every outgoing request.
#[derive(Clone)]
pub enum Credentials {
    /// OAuth-style bearer token.
    Bearer(String),
    /// Programmatic API key pair, sent as HTTP basic auth.
    ApiKey { public: String, private: String },
}

impl Credentials {
    /// Attach this credential to a request.
    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::Bearer(token) => request.bearer_auth(token),
            Credentials::ApiKey { public, private } => request.basic_auth(public, Some(private)),
        }
    }
}

// Manual Debug so tokens and private keys never reach logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Bearer(_) => f.write_str("Bearer(***)"),
            Credentials::ApiKey { public, .. } => f
                .debug_struct("ApiKey")
                .field("public", public)
                .field("private", &"***")
                .finish(),
        }
    }
}
