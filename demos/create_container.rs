//! Create an AWS network container in an Atlas project.
//!
//! Usage:
//!   ATLAS_PUBLIC_KEY=... ATLAS_PRIVATE_KEY=... \
//!     cargo run --example create_container -- <group-id> <cidr> <region>

use anyhow::{Context, Result};
use atlas_peering::{AtlasClient, Container, Credentials};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let usage = "usage: create_container <group-id> <cidr> <region>";
    let gid = args.next().context(usage)?;
    let cidr = args.next().context(usage)?;
    let region = args.next().context(usage)?;

    let public = std::env::var("ATLAS_PUBLIC_KEY").context("ATLAS_PUBLIC_KEY not set")?;
    let private = std::env::var("ATLAS_PRIVATE_KEY").context("ATLAS_PRIVATE_KEY not set")?;

    let client = AtlasClient::new(Credentials::ApiKey { public, private })?;

    let params = Container {
        provider_name: Some("AWS".to_string()),
        atlas_cidr_block: Some(cidr),
        region_name: Some(region),
        ..Container::default()
    };

    let created = client.containers().create(&gid, &params).await?.into_body();
    println!(
        "created container {} ({} in {})",
        created.id.as_deref().unwrap_or("-"),
        created.atlas_cidr_block.as_deref().unwrap_or("-"),
        created.region_name.as_deref().unwrap_or("-"),
    );

    Ok(())
}
