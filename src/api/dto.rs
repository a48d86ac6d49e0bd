//! Response DTOs and the statistics computation over cached results.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Article, Sentiment};

/// GET / response.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub features: [&'static str; 3],
}

/// GET /health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Cached aggregation results currently held.
    pub cache_size: usize,
    /// Live rate-limit markers.
    pub rate_limit_cache_size: usize,
}

/// GET /api/stats response: statistics when the canonical entry exists,
/// otherwise a no-data status.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatsResponse {
    NoData {
        status: &'static str,
        message: &'static str,
    },
    Ready(NewsStats),
}

impl StatsResponse {
    pub fn no_data() -> Self {
        Self::NoData {
            status: "no_data",
            message: "No data available. Make a news request first.",
        }
    }
}

/// Aggregate statistics over one cached result set.
#[derive(Debug, PartialEq, Serialize)]
pub struct NewsStats {
    pub total_articles: usize,
    /// All three labels are always present, zero-defaulted.
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    pub top_sources: Vec<CountEntry>,
    pub top_symbols: Vec<CountEntry>,
}

/// One (name, count) ranking row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

/// Ranking rows reported for sources and symbols.
const TOP_N: usize = 5;

/// Compute the statistics view over a cached article list.
pub fn compute_stats(articles: &[Article]) -> NewsStats {
    let mut sentiment_distribution: BTreeMap<Sentiment, usize> =
        [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
            .into_iter()
            .map(|label| (label, 0))
            .collect();
    let mut source_counts: HashMap<&str, usize> = HashMap::new();
    let mut symbol_counts: HashMap<&str, usize> = HashMap::new();

    for article in articles {
        *sentiment_distribution.entry(article.sentiment).or_insert(0) += 1;
        *source_counts.entry(&article.source).or_insert(0) += 1;
        for symbol in &article.related_symbols {
            *symbol_counts.entry(symbol).or_insert(0) += 1;
        }
    }

    NewsStats {
        total_articles: articles.len(),
        sentiment_distribution,
        top_sources: top_n(source_counts),
        top_symbols: top_n(symbol_counts),
    }
}

/// Rank by descending count; ties break by name so the order is stable.
fn top_n(counts: HashMap<&str, usize>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(name, count)| CountEntry {
            name: name.to_owned(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(TOP_N);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(source: &str, sentiment: Sentiment, symbols: &[&str]) -> Article {
        Article {
            id: "id".into(),
            title: "title".into(),
            description: "description".into(),
            source: source.into(),
            url: "https://example.com".into(),
            published_at: "2024-12-12T10:30:00Z".parse().unwrap(),
            related_symbols: symbols.iter().map(|s| (*s).to_owned()).collect(),
            sentiment,
            sentiment_score: 0.9,
        }
    }

    fn entry(name: &str, count: usize) -> CountEntry {
        CountEntry {
            name: name.into(),
            count,
        }
    }

    #[test]
    fn stats_over_fixture_articles() {
        let articles = vec![
            article("A", Sentiment::Positive, &["AAPL"]),
            article("A", Sentiment::Positive, &["AAPL"]),
            article("B", Sentiment::Negative, &["MSFT"]),
        ];

        let stats = compute_stats(&articles);

        assert_eq!(stats.total_articles, 3);
        assert_eq!(stats.sentiment_distribution[&Sentiment::Positive], 2);
        assert_eq!(stats.sentiment_distribution[&Sentiment::Neutral], 0);
        assert_eq!(stats.sentiment_distribution[&Sentiment::Negative], 1);
        assert_eq!(stats.top_sources, vec![entry("A", 2), entry("B", 1)]);
        assert_eq!(stats.top_symbols, vec![entry("AAPL", 2), entry("MSFT", 1)]);
    }

    #[test]
    fn all_sentiment_labels_present_for_empty_input() {
        let stats = compute_stats(&[]);

        assert_eq!(stats.total_articles, 0);
        assert_eq!(stats.sentiment_distribution.len(), 3);
        assert!(stats.sentiment_distribution.values().all(|&count| count == 0));
        assert!(stats.top_sources.is_empty());
        assert!(stats.top_symbols.is_empty());
    }

    #[test]
    fn rankings_are_capped_at_five() {
        let articles: Vec<Article> = ["S1", "S2", "S3", "S4", "S5", "S6", "S7"]
            .iter()
            .map(|source| article(source, Sentiment::Neutral, &[]))
            .collect();

        let stats = compute_stats(&articles);
        assert_eq!(stats.top_sources.len(), 5);
    }

    #[test]
    fn ranking_ties_break_by_name() {
        let articles = vec![
            article("B", Sentiment::Neutral, &[]),
            article("A", Sentiment::Neutral, &[]),
        ];

        let stats = compute_stats(&articles);
        assert_eq!(stats.top_sources, vec![entry("A", 1), entry("B", 1)]);
    }

    #[test]
    fn symbol_counts_flatten_across_articles() {
        let articles = vec![
            article("A", Sentiment::Neutral, &["AAPL", "AAPL", "MSFT"]),
            article("B", Sentiment::Neutral, &["AAPL"]),
        ];

        let stats = compute_stats(&articles);
        assert_eq!(stats.top_symbols, vec![entry("AAPL", 3), entry("MSFT", 1)]);
    }

    #[test]
    fn no_data_response_serializes_status() {
        let json = serde_json::to_string(&StatsResponse::no_data()).unwrap();
        assert!(json.contains("\"status\":\"no_data\""));
        assert!(json.contains("Make a news request first"));
    }

    #[test]
    fn sentiment_distribution_serializes_all_labels() {
        let stats = compute_stats(&[article("A", Sentiment::Positive, &[])]);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"POSITIVE\":1"));
        assert!(json.contains("\"NEUTRAL\":0"));
        assert!(json.contains("\"NEGATIVE\":0"));
    }
}
