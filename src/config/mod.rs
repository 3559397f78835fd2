//! Configuration module for the Censo client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the census backend, without a trailing slash
    pub base_url: String,
    /// Route prefix the family-group endpoints live under
    pub resource: String,
    /// Timeout applied to every request
    pub timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("CENSO_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        let resource = env::var("CENSO_RESOURCE").unwrap_or_else(|_| "user".to_string());

        let timeout_secs = env::var("CENSO_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let log_level = env::var("CENSO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            base_url,
            resource,
            timeout: Duration::from_secs(timeout_secs),
            log_level,
        }
    }

    /// Configuration pointing at an explicit base URL, defaults elsewhere.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            resource: "user".to_string(),
            timeout: Duration::from_secs(30),
            log_level: "info".to_string(),
        }
    }
}
