//! Ping Example
//!
//! Health-checks a local Solr core through its admin/ping handler.
//!
//! Run with: cargo run --example ping

use solrkit::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("solrkit=debug,solrkit_core=debug")),
        )
        .init();

    let client = Client::connect("localhost", 8983, "mycore")?;
    println!("Pinging {} ...\n", client.handler_url("admin/ping"));

    let response = client.ping("admin/ping").await?;

    println!("Response:");
    for (key, value) in &response {
        println!("  {}: {}", key, value);
    }

    Ok(())
}
