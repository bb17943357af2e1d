use serde::Deserialize;

use crate::error::AppError;

/// Number of results requested from each endpoint when unset
pub const DEFAULT_RESULT_LIMIT: u32 = 12;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Recommendation backend base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Number of results requested from both endpoints
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,

    /// Optional user identifier forwarded to `/recommend`
    #[serde(default)]
    pub user_id: Option<String>,

    /// Drop responses of requests superseded by a later intent
    #[serde(default)]
    pub discard_stale_responses: bool,

    /// Per-request timeout; unset leaves the HTTP client default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_result_limit() -> u32 {
    DEFAULT_RESULT_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            result_limit: default_result_limit(),
            user_id: None,
            discard_stale_responses: false,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the controller cannot work with
    pub fn validate(&self) -> Result<(), AppError> {
        if self.result_limit == 0 {
            return Err(AppError::InvalidInput(
                "result limit must be positive".to_string(),
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(AppError::InvalidInput("API URL cannot be empty".to_string()));
        }
        Ok(())
    }
}
