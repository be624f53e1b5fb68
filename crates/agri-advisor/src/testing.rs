//! Scripted test doubles for the client traits.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::wire::{
    Citation, FeedbackRequest, FeedbackResponse, HealthStatus, MarketItem, NewsItem,
    QueryRequest, QueryResponse, WeatherReport,
};
use crate::{AdvisorClient, DashboardSource, TransportError};

/// Advisor that replays scripted outcomes in order and records every request.
#[derive(Default)]
pub(crate) struct ScriptedAdvisor {
    replies: Mutex<VecDeque<Result<QueryResponse, TransportError>>>,
    requests: Mutex<Vec<QueryRequest>>,
    feedback: Mutex<Vec<FeedbackRequest>>,
    /// When set, each query waits for one `notify_one` before replying.
    gate: Option<Arc<Notify>>,
    panic_on_query: bool,
}

impl ScriptedAdvisor {
    pub(crate) fn replying(replies: Vec<Result<QueryResponse, TransportError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Self::default()
        }
    }

    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn panicking() -> Self {
        Self {
            panic_on_query: true,
            ..Self::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<QueryRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn feedback_requests(&self) -> Vec<FeedbackRequest> {
        self.feedback.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdvisorClient for ScriptedAdvisor {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.panic_on_query {
            panic!("scripted advisor panic");
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".into())))
    }

    async fn feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<FeedbackResponse, TransportError> {
        self.feedback.lock().unwrap().push(request.clone());
        Ok(FeedbackResponse {
            success: true,
            message: "Thanks for your feedback!".into(),
        })
    }

    async fn health(&self) -> Result<HealthStatus, TransportError> {
        Ok(HealthStatus {
            status: "healthy".into(),
            project: "scripted".into(),
            version: "0.0.0".into(),
        })
    }
}

/// Dashboard source with a fixed outcome per resource.
pub(crate) struct FixedDashboard {
    pub(crate) weather: Result<WeatherReport, TransportError>,
    pub(crate) market: Result<Vec<MarketItem>, TransportError>,
    pub(crate) news: Result<Vec<NewsItem>, TransportError>,
    pub(crate) calls: AtomicUsize,
}

impl FixedDashboard {
    pub(crate) fn all_ok() -> Self {
        Self {
            weather: Ok(weather()),
            market: Ok(market()),
            news: Ok(news()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardSource for FixedDashboard {
    async fn weather(&self) -> Result<WeatherReport, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.weather.clone()
    }

    async fn market(&self) -> Result<Vec<MarketItem>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.market.clone()
    }

    async fn news(&self) -> Result<Vec<NewsItem>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.news.clone()
    }
}

pub(crate) fn citrus_answer() -> QueryResponse {
    QueryResponse {
        answer: "Citrus canker causes lesions...".into(),
        sources: vec![Citation::new("citrus_pathology.pdf", Some(12.into()))],
        search_triggered: Some(false),
        intent: None,
    }
}

pub(crate) fn weather() -> WeatherReport {
    WeatherReport {
        temperature: 28.0,
        condition: "Partly Cloudy".into(),
        location: "Central Hub".into(),
        humidity: Some(45.0),
        wind_speed: Some(12.0),
        forecast: Vec::new(),
    }
}

pub(crate) fn market() -> Vec<MarketItem> {
    vec![
        MarketItem {
            crop: "Wheat (High Quality)".into(),
            price: 2450.0,
            change: 2.5,
            mandi: "Ahmedabad".into(),
            unit: Some("Quintal".into()),
        },
        MarketItem {
            crop: "Citrus (Grade A)".into(),
            price: 3800.0,
            change: 5.0,
            mandi: "Nagpur".into(),
            unit: Some("Quintal".into()),
        },
    ]
}

pub(crate) fn news() -> Vec<NewsItem> {
    vec![NewsItem {
        id: 1,
        title: "New Government Subsidy for Drip Irrigation".into(),
        source: "AgriDaily".into(),
        time: "2 hours ago".into(),
    }]
}
