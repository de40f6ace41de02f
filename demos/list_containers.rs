//! List the network containers of an Atlas project.
//!
//! Usage:
//!   ATLAS_PUBLIC_KEY=... ATLAS_PRIVATE_KEY=... \
//!     cargo run --example list_containers -- <group-id> [provider]

use anyhow::{Context, Result};
use atlas_peering::{AtlasClient, Credentials};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let gid = args
        .next()
        .context("usage: list_containers <group-id> [provider]")?;
    let provider = args.next().unwrap_or_else(|| "AWS".to_string());

    let public = std::env::var("ATLAS_PUBLIC_KEY").context("ATLAS_PUBLIC_KEY not set")?;
    let private = std::env::var("ATLAS_PRIVATE_KEY").context("ATLAS_PRIVATE_KEY not set")?;

    let client = AtlasClient::new(Credentials::ApiKey { public, private })?;

    let list = client.containers().list(&gid, &provider).await?.into_body();
    println!(
        "{} of {} container(s) for provider {}:",
        list.results.len(),
        list.total_count,
        provider
    );
    for container in list.results {
        println!(
            "  {}  {}  {}  provisioned={}",
            container.id.as_deref().unwrap_or("-"),
            container.region_name.as_deref().unwrap_or("-"),
            container.atlas_cidr_block.as_deref().unwrap_or("-"),
            container.provisioned.unwrap_or(false),
        );
    }

    Ok(())
}
