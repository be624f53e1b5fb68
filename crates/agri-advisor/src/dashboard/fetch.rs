//! Concurrent, independently failing dashboard refresh.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{DashboardSource, TransportError};

use super::snapshot::DashboardSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Weather,
    Market,
    News,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Weather => "weather",
            Resource::Market => "market",
            Resource::News => "news",
        })
    }
}

/// A failed ambient fetch. Logged, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{resource} fetch failed: {source}")]
pub struct DashboardError {
    pub resource: Resource,
    #[source]
    pub source: TransportError,
}

/// Outcome of one refresh, for callers that care which resources landed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub updated: Vec<Resource>,
    pub failed: Vec<Resource>,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, resource: Resource, result: Result<(), DashboardError>) {
        match result {
            Ok(()) => self.updated.push(resource),
            Err(e) => {
                warn!(resource = %e.resource, "dashboard fetch failed: {}", e.source);
                self.failed.push(resource);
            }
        }
    }
}

/// Fetches the dashboard resources and holds the latest snapshot.
#[derive(Clone)]
pub struct DashboardFetcher {
    source: Arc<dyn DashboardSource>,
    snapshot: Arc<RwLock<DashboardSnapshot>>,
    include_news: bool,
}

impl DashboardFetcher {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self {
            source,
            snapshot: Arc::new(RwLock::new(DashboardSnapshot::default())),
            include_news: true,
        }
    }

    pub fn with_news(mut self, include_news: bool) -> Self {
        self.include_news = include_news;
        self
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch every resource concurrently. Never fails; see the report for
    /// which resources were replaced.
    pub async fn refresh(&self) -> RefreshReport {
        let news = async {
            if self.include_news {
                Some(self.refresh_news().await)
            } else {
                None
            }
        };
        let (weather, market, news) =
            tokio::join!(self.refresh_weather(), self.refresh_market(), news);

        let mut report = RefreshReport::default();
        report.record(Resource::Weather, weather);
        report.record(Resource::Market, market);
        if let Some(news) = news {
            report.record(Resource::News, news);
        }

        info!(
            updated = report.updated.len(),
            failed = report.failed.len(),
            "dashboard refreshed"
        );
        report
    }

    /// Run `refresh` in the background.
    pub fn spawn_refresh(&self) -> JoinHandle<RefreshReport> {
        let fetcher = self.clone();
        tokio::spawn(async move { fetcher.refresh().await })
    }

    async fn refresh_weather(&self) -> Result<(), DashboardError> {
        let weather = self
            .source
            .weather()
            .await
            .map_err(|source| DashboardError {
                resource: Resource::Weather,
                source,
            })?;
        debug!(location = %weather.location, "weather updated");
        self.update(|snapshot| {
            snapshot.weather = Some(weather);
            snapshot.weather_at = Some(Utc::now());
        });
        Ok(())
    }

    async fn refresh_market(&self) -> Result<(), DashboardError> {
        let market = self.source.market().await.map_err(|source| DashboardError {
            resource: Resource::Market,
            source,
        })?;
        debug!(items = market.len(), "market prices updated");
        self.update(|snapshot| {
            snapshot.market = Some(market);
            snapshot.market_at = Some(Utc::now());
        });
        Ok(())
    }

    async fn refresh_news(&self) -> Result<(), DashboardError> {
        let news = self.source.news().await.map_err(|source| DashboardError {
            resource: Resource::News,
            source,
        })?;
        debug!(items = news.len(), "news updated");
        self.update(|snapshot| {
            snapshot.news = Some(news);
            snapshot.news_at = Some(Utc::now());
        });
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut DashboardSnapshot)) {
        let mut snapshot = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        apply(&mut snapshot);
    }
}
