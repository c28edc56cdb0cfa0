//! Backend API endpoint configuration

use serde::{Deserialize, Serialize};

/// Default backend base URL used when no environment override is present
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend API client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the backend service (scheme + host + optional port)
    pub base_url: String,

    /// Timeout for API requests in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads `JIBU_API_URL` for the base URL (falling back to
    /// `http://localhost:8000`) and `JIBU_API_TIMEOUT_SECS` for the request
    /// timeout. Unparseable timeout values fall back to the default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("JIBU_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            timeout_secs: std::env::var("JIBU_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Check that the base URL carries an http or https scheme
    pub fn is_valid(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.is_valid());
    }

    #[test]
    fn test_from_env() {
        std::env::remove_var("JIBU_API_URL");
        std::env::remove_var("JIBU_API_TIMEOUT_SECS");

        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        std::env::set_var("JIBU_API_URL", "https://api.jibu.example");
        std::env::set_var("JIBU_API_TIMEOUT_SECS", "5");

        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, "https://api.jibu.example");
        assert_eq!(config.timeout_secs, 5);

        // Clean up
        std::env::remove_var("JIBU_API_URL");
        std::env::remove_var("JIBU_API_TIMEOUT_SECS");
    }

    #[test]
    fn test_invalid_scheme() {
        let config = ApiConfig::new("ftp://files.example.com");
        assert!(!config.is_valid());
    }
}
