//! Wire types for the two upstream providers.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of provider search results.
///
/// Records stay raw JSON so a single malformed record can be skipped
/// during transformation without losing the rest of the page.
#[derive(Debug, Deserialize)]
pub struct NewsPage {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// Provider record shape for one article.
#[derive(Debug, Deserialize)]
pub struct RawArticle {
    pub uuid: String,
    pub title: String,
    pub description: Option<String>,
    pub snippet: Option<String>,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub entities: Vec<RawEntity>,
}

/// Entity annotation; only equity entities carry a symbol we use.
#[derive(Debug, Deserialize)]
pub struct RawEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub symbol: Option<String>,
}

/// One ranked (label, score) pair from the classification endpoint.
#[derive(Debug, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}
