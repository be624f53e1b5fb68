use serde::{Deserialize, Serialize};

/// Ambient dashboard data fetched once at session start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub enabled: bool,
    /// Also fetch the headline feed alongside weather and market prices.
    pub include_news: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            include_news: true,
        }
    }
}
