//! Trait implementations for `HttpAdvisorClient`.

use async_trait::async_trait;

use crate::wire::{
    FeedbackRequest, FeedbackResponse, HealthStatus, MarketItem, NewsItem, QueryRequest,
    QueryResponse, WeatherReport,
};
use crate::{AdvisorClient, DashboardSource, TransportError};

use super::client::{
    HttpAdvisorClient, FEEDBACK_PATH, HEALTH_PATH, MARKET_PATH, NEWS_PATH, QUERY_PATH,
    WEATHER_PATH,
};

#[async_trait]
impl AdvisorClient for HttpAdvisorClient {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, TransportError> {
        self.post_json(QUERY_PATH, request).await
    }

    async fn feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<FeedbackResponse, TransportError> {
        self.post_json(FEEDBACK_PATH, request).await
    }

    async fn health(&self) -> Result<HealthStatus, TransportError> {
        self.get_json(HEALTH_PATH).await
    }
}

#[async_trait]
impl DashboardSource for HttpAdvisorClient {
    async fn weather(&self) -> Result<WeatherReport, TransportError> {
        self.get_json(WEATHER_PATH).await
    }

    async fn market(&self) -> Result<Vec<MarketItem>, TransportError> {
        self.get_json(MARKET_PATH).await
    }

    async fn news(&self) -> Result<Vec<NewsItem>, TransportError> {
        self.get_json(NEWS_PATH).await
    }
}
