use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::wire::{MarketItem, NewsItem, WeatherReport};

use super::fetch::Resource;

/// Latest successfully fetched ambient data. `None` means never fetched
/// (or every attempt so far failed).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub weather: Option<WeatherReport>,
    pub market: Option<Vec<MarketItem>>,
    pub news: Option<Vec<NewsItem>>,
    /// When each resource was last replaced. A failed fetch leaves its
    /// timestamp alone.
    pub weather_at: Option<DateTime<Utc>>,
    pub market_at: Option<DateTime<Utc>>,
    pub news_at: Option<DateTime<Utc>>,
}

impl DashboardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.weather.is_none() && self.market.is_none() && self.news.is_none()
    }

    pub fn refreshed_at(&self, resource: Resource) -> Option<DateTime<Utc>> {
        match resource {
            Resource::Weather => self.weather_at,
            Resource::Market => self.market_at,
            Resource::News => self.news_at,
        }
    }
}
