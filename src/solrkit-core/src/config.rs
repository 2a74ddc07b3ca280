use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u32,
    pub core: String,

    /// Optional per-request timeout in seconds; no timeout when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ConnectionConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ConnectionConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
