//! Knowledge-service connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the knowledge service lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Scheme, host and port of the backend, without a trailing path.
    pub base_url: String,
    /// TCP connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl ServerConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_secs))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_secs))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
