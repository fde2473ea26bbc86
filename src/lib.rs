pub mod client;
pub mod worlds;

pub use client::{ApiClient, ApiError};

pub const API_BASE_URL: &str = "https://api.worldlabs.ai/marble/v1";
pub const MARBLE_MODEL: &str = "Marble 0.1-mini";

/// Connection settings for the Marble API. Built once at startup and passed
/// into [`ApiClient`]; there is no global configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }
}
