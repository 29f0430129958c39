//! Client configuration.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default prediction service base URL.
pub const DEFAULT_BASE_URL: &str = "https://backendhypertension-production.up.railway.app/api";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "HRP_API_URL";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the prediction client.
///
/// Precedence for the base URL: explicit caller override, then
/// `HRP_API_URL`, then the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the prediction service, without the `/predict` suffix.
    pub base_url: String,

    /// Request timeout. There is no retry or cancellation; one request runs
    /// to completion within this window or fails.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    REQUEST_TIMEOUT
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(BASE_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                config.base_url = url.to_string();
            }
        }
        config
    }

    /// Replace the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL of the predict endpoint.
    #[must_use]
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_url_tolerates_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:8000/api/");
        assert_eq!(config.predict_url(), "http://localhost:8000/api/predict");
    }

    #[test]
    fn default_points_at_production() {
        let config = ClientConfig::default();
        assert_eq!(
            config.predict_url(),
            "https://backendhypertension-production.up.railway.app/api/predict"
        );
    }
}
