//! Update Example
//!
//! Indexes a single document into a local Solr core and commits it.
//!
//! Run with: cargo run --example update

use std::collections::HashMap;

use serde_json::json;
use solrkit::{codec, Client};
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

    // One add-document command in Solr's JSON update format
    let mut command = serde_json::Map::new();
    command.insert(
        "add".to_string(),
        json!({
            "doc": {
                "id": "doc-1",
                "title": "The quick brown fox",
            }
        }),
    );
    let body = codec::encode(&command)?;

    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    println!("Sending update to {} ...\n", client.handler_url("update"));
    let response = client.update("update", body, true, Some(headers)).await?;

    println!("Response:");
    for (key, value) in &response {
        println!("  {}: {}", key, value);
    }

    Ok(())
}
