//! Conversation core for the Agri-Cult advisory client.
//!
//! Provides:
//! - `session`: the append-only turn log and its single pending flag
//! - `dispatcher`: question submission with at most one query in flight
//! - `dashboard`: best-effort ambient weather, market and news snapshot
//! - `http`: the reqwest transport for the knowledge service
//!
//! Presentation reads `SessionSnapshot` / `DashboardSnapshot` and issues
//! commands through `QueryDispatcher`; nothing here renders anything.

pub mod dashboard;
pub mod dispatcher;
pub mod http;
pub mod session;
pub mod wire;

#[cfg(test)]
mod testing;

use async_trait::async_trait;

pub use dashboard::{DashboardError, DashboardFetcher, DashboardSnapshot, RefreshReport, Resource};
pub use dispatcher::{InflightQuery, QueryDispatcher};
pub use http::{HttpAdvisorClient, HttpConfig};
pub use session::{Phase, SessionError, SessionSnapshot, SessionStore, Speaker, Turn, OFFLINE_NOTICE};
pub use wire::{
    Citation, FeedbackRequest, FeedbackResponse, ForecastDay, HealthStatus, MarketItem, NewsItem,
    PageRef, QueryRequest, QueryResponse, WeatherReport,
};

/// Conversation endpoints of the knowledge service.
#[async_trait]
pub trait AdvisorClient: Send + Sync {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, TransportError>;

    async fn feedback(&self, request: &FeedbackRequest)
        -> Result<FeedbackResponse, TransportError>;

    async fn health(&self) -> Result<HealthStatus, TransportError>;
}

/// Read-only ambient endpoints backing the dashboard.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn weather(&self) -> Result<WeatherReport, TransportError>;

    async fn market(&self) -> Result<Vec<MarketItem>, TransportError>;

    async fn news(&self) -> Result<Vec<NewsItem>, TransportError>;
}

/// Any failed exchange with the backend. Callers on the query path never
/// see this: it becomes the offline-notice turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
}
