// src/config.rs
use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Metadata API base URL
    #[serde(default = "default_metadata_api_url")]
    pub metadata_api_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Override for the local database directory
    #[serde(default)]
    pub data_dir: Option<String>,
}

fn default_metadata_api_url() -> String {
    "https://api.jikan.moe/v4".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata_api_url: default_metadata_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            data_dir: None,
        }
    }
}
