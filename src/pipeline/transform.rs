//! Pure transformation of provider pages into canonical article drafts.

use chrono::{DateTime, Utc};

use super::wire::{NewsPage, RawArticle};
use crate::models::{Article, Sentiment};

/// A transformed article that has not been through sentiment enrichment.
///
/// Only [`ArticleDraft::into_article`] produces a served [`Article`], so an
/// unenriched article cannot leak out of the pipeline.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub related_symbols: Vec<String>,
}

impl ArticleDraft {
    pub fn into_article(self, sentiment: Sentiment, sentiment_score: f64) -> Article {
        Article {
            id: self.id,
            title: self.title,
            description: self.description,
            source: self.source,
            url: self.url,
            published_at: self.published_at,
            related_symbols: self.related_symbols,
            sentiment,
            sentiment_score,
        }
    }
}

/// Map one provider page into canonical drafts.
///
/// Records that fail to deserialize are skipped so one bad record cannot
/// discard the rest of the page.
pub fn transform(page: &NewsPage) -> Vec<ArticleDraft> {
    page.data
        .iter()
        .filter_map(|record| match serde_json::from_value::<RawArticle>(record.clone()) {
            Ok(raw) => Some(draft_from_raw(raw)),
            Err(err) => {
                tracing::warn!(%err, "skipping malformed news record");
                None
            }
        })
        .collect()
}

fn draft_from_raw(raw: RawArticle) -> ArticleDraft {
    // Long-form description, falling back to the short snippet.
    let description = match raw.description {
        Some(d) if !d.is_empty() => d,
        _ => raw.snippet.unwrap_or_default(),
    };

    let related_symbols = raw
        .entities
        .into_iter()
        .filter(|entity| entity.entity_type == "equity")
        .filter_map(|entity| entity.symbol)
        .collect();

    ArticleDraft {
        id: raw.uuid,
        title: raw.title,
        description,
        source: raw.source,
        url: raw.url,
        published_at: raw.published_at,
        related_symbols,
    }
}
