//! Canonical article and sentiment types shared across the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-way sentiment label attached to every served article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "POSITIVE")]
    Positive,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "NEGATIVE")]
    Negative,
}

impl Sentiment {
    /// Map a provider label (case-insensitive) onto the canonical split.
    /// Unrecognized labels read as neutral.
    pub fn from_provider_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// One news article as served to clients.
///
/// Field names follow the established wire contract: `publishedAt` and
/// `relatedSymbols` are camel case, the sentiment fields are snake case.
/// An `Article` always carries its sentiment; drafts that have not been
/// enriched yet live in [`crate::pipeline::transform::ArticleDraft`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    /// Provider-supplied publish time; the sole sort key.
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    /// Ticker symbols of equity entities, provider order, duplicates kept.
    #[serde(rename = "relatedSymbols")]
    pub related_symbols: Vec<String>,
    pub sentiment: Sentiment,
    /// Confidence in [0.0, 1.0] for `sentiment`.
    pub sentiment_score: f64,
}
