//! JSON bodies exchanged with the knowledge service.
//!
//! Decoding is lenient where the backend is loose: optional fields may be
//! missing or `null`, and unknown fields are ignored.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// `POST /query` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub session_id: String,
}

/// `POST /query` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<Citation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_triggered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

/// Provenance of an answer: a source document and optionally where in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub document: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageRef>,
}

impl Citation {
    pub fn new(document: impl Into<String>, page: Option<PageRef>) -> Self {
        Self {
            document: document.into(),
            page,
        }
    }
}

/// Page locator; the backend sends either a number or a free-form label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRef {
    Number(serde_json::Number),
    Label(String),
}

impl From<u64> for PageRef {
    fn from(page: u64) -> Self {
        PageRef::Number(page.into())
    }
}

impl From<&str> for PageRef {
    fn from(label: &str) -> Self {
        PageRef::Label(label.to_string())
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Number(n) => write!(f, "{n}"),
            PageRef::Label(s) => f.write_str(s),
        }
    }
}

/// `POST /feedback` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub question: String,
    pub session_id: String,
    pub is_satisfied: bool,
    /// Corrected information supplied by the farmer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: String,
}

/// `GET /` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub version: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Degrees Celsius.
    pub temperature: f64,
    pub condition: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub temp: f64,
    pub condition: String,
}

/// One mandi price listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    pub crop: String,
    pub price: f64,
    /// Percent change since the previous listing.
    pub change: f64,
    pub mandi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MarketItem {
    pub fn is_rising(&self) -> bool {
        self.change >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u64,
    pub title: String,
    pub source: String,
    /// Relative publication time as reported, e.g. "2 hours ago".
    pub time: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_serializes_with_snake_case_keys() {
        let req = QueryRequest {
            question: "price of wheat".into(),
            session_id: "default".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"question": "price of wheat", "session_id": "default"})
        );
    }

    #[test]
    fn full_query_response_decodes() {
        let body = r#"{
            "success": true,
            "intent": "disease",
            "answer": "Citrus canker causes lesions...",
            "sources": [{"document": "citrus_pathology.pdf", "page": 12}],
            "search_triggered": false
        }"#;
        let resp: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.answer, "Citrus canker causes lesions...");
        assert_eq!(
            resp.sources,
            vec![Citation::new("citrus_pathology.pdf", Some(12.into()))]
        );
        assert_eq!(resp.search_triggered, Some(false));
        assert_eq!(resp.intent.as_deref(), Some("disease"));
    }

    #[test]
    fn minimal_query_response_decodes() {
        let resp: QueryResponse = serde_json::from_str(r#"{"answer": "Sow after rains."}"#).unwrap();
        assert!(resp.sources.is_empty());
        assert_eq!(resp.search_triggered, None);
        assert_eq!(resp.intent, None);
    }

    #[test]
    fn null_sources_decode_as_empty() {
        let resp: QueryResponse =
            serde_json::from_str(r#"{"answer": "ok", "sources": null}"#).unwrap();
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn missing_answer_is_an_error() {
        let result = serde_json::from_str::<QueryResponse>(r#"{"sources": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn page_accepts_number_label_null_and_absent() {
        let sources: Vec<Citation> = serde_json::from_str(
            r#"[
                {"document": "a.pdf", "page": 3},
                {"document": "b.pdf", "page": "iv"},
                {"document": "c.pdf", "page": null},
                {"document": "https://agmarknet.gov.in"}
            ]"#,
        )
        .unwrap();
        assert_eq!(sources[0].page, Some(PageRef::from(3)));
        assert_eq!(sources[1].page, Some(PageRef::from("iv")));
        assert_eq!(sources[2].page, None);
        assert_eq!(sources[3].page, None);
    }

    #[test]
    fn page_ref_display() {
        assert_eq!(PageRef::from(12).to_string(), "12");
        assert_eq!(PageRef::from("Annex B").to_string(), "Annex B");
    }

    #[test]
    fn feedback_request_omits_missing_correction() {
        let req = FeedbackRequest {
            question: "q".into(),
            session_id: "s".into(),
            is_satisfied: true,
            correct_info: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("correct_info").is_none());
        assert_eq!(json["is_satisfied"], true);
    }

    #[test]
    fn weather_decodes_with_extras() {
        let body = r#"{
            "location": "Central Hub", "temperature": 28, "condition": "Partly Cloudy",
            "humidity": 45, "wind_speed": 12,
            "forecast": [{"day": "Tue", "temp": 29, "condition": "Sunny"}]
        }"#;
        let weather: WeatherReport = serde_json::from_str(body).unwrap();
        assert_eq!(weather.temperature, 28.0);
        assert_eq!(weather.humidity, Some(45.0));
        assert_eq!(weather.forecast.len(), 1);
        assert_eq!(weather.forecast[0].day, "Tue");
    }

    #[test]
    fn market_item_direction() {
        let items: Vec<MarketItem> = serde_json::from_str(
            r#"[
                {"crop": "Wheat (High Quality)", "price": 2450, "unit": "Quintal", "change": 2.5, "mandi": "Ahmedabad"},
                {"crop": "Paddy (Basmati)", "price": 4200, "change": -1.2, "mandi": "Patiala"},
                {"crop": "Cotton", "price": 7100, "change": 0.0, "mandi": "Amravati"}
            ]"#,
        )
        .unwrap();
        assert!(items[0].is_rising());
        assert!(!items[1].is_rising());
        assert!(items[2].is_rising());
        assert_eq!(items[0].unit.as_deref(), Some("Quintal"));
        assert_eq!(items[1].unit, None);
    }

    #[test]
    fn health_status() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"status": "healthy", "project": "Agentic Agriculture RAG API", "version": "1.0.0"}"#,
        )
        .unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.version, "1.0.0");
    }
}
