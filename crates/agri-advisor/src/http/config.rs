//! HTTP client configuration.

use std::time::Duration;

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl HttpConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Absolute URL for an endpoint path such as `/query`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
