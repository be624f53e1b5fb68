//! HTTP client struct and response handling shared by every endpoint.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::TransportError;

use super::config::HttpConfig;

pub(crate) const QUERY_PATH: &str = "/query";
pub(crate) const FEEDBACK_PATH: &str = "/feedback";
pub(crate) const HEALTH_PATH: &str = "/";
pub(crate) const WEATHER_PATH: &str = "/api/v1/dashboard/weather";
pub(crate) const MARKET_PATH: &str = "/api/v1/dashboard/market";
pub(crate) const NEWS_PATH: &str = "/api/v1/dashboard/news";

/// Longest slice of an error body kept in `TransportError::Status`.
const ERROR_BODY_LIMIT: usize = 200;

/// Knowledge-service client.
pub struct HttpAdvisorClient {
    pub(crate) config: HttpConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpAdvisorClient {
    pub fn new(config: HttpConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TransportError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, TransportError> {
        let url = self.config.endpoint(path);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await.map_err(send_error)?;
        decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(send_error)?;
        decode(response).await
    }
}

fn send_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(e.to_string())
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(TransportError::Status {
            status: status.as_u16(),
            body: text.chars().take(ERROR_BODY_LIMIT).collect(),
        });
    }

    response.json::<T>().await.map_err(|e| {
        if e.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Decode(e.to_string())
        }
    })
}
