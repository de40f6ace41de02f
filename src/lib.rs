//! Client for the MongoDB Atlas network peering API.
//!
//! Covers the network container and private IP mode resources of an Atlas
//! project (group): the per-project network allocations that back VPC
//! peering with a cloud provider, and the project-level toggle for private
//! IP addressing. Each method maps onto exactly one HTTP endpoint; there is
//! no retry policy, caching, or local state.
//!
//! # Module Structure
//!
//! - [`auth`] - Credential schemes applied to outgoing requests
//! - [`client`] - Shared Atlas client, builder, and URL construction
//! - [`containers`] - Network container endpoints (list/get/create/update/delete)
//! - [`private_ip_mode`] - Project private IP mode toggle
//! - [`error`] - Error union and the decoded API error payload
//!
//! # Example
//!
//! ```ignore
//! use atlas_peering::{AtlasClient, Credentials};
//!
//! async fn example() -> atlas_peering::Result<()> {
//!     let client = AtlasClient::new(Credentials::ApiKey {
//!         public: "user".into(),
//!         private: "key".into(),
//!     })?;
//!     let list = client.containers().list("5f3e2a1b", "AWS").await?.into_body();
//!     println!("{} containers", list.total_count);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod containers;
pub mod error;
mod http;
pub mod private_ip_mode;

pub use auth::Credentials;
pub use client::{AtlasClient, ClientBuilder, DEFAULT_BASE_URL};
pub use containers::{Container, ContainerList, Containers};
pub use error::{ApiResponse, Error, ErrorPayload, Result};
pub use private_ip_mode::{PrivateIpMode, PrivateIpModeSetting};
