#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use url::Url;

use news_sentiment_api::api::AppState;
use news_sentiment_api::config::{NewsApiConfig, SentimentApiConfig};
use news_sentiment_api::models::{Article, Sentiment};
use news_sentiment_api::pipeline::{NewsClient, SentimentClient};
use news_sentiment_api::store::{NewsCache, RateLimiter};

pub fn news_client(base_url: &str) -> NewsClient {
    NewsClient::new(&NewsApiConfig {
        base_url: Url::parse(base_url).expect("valid base url"),
        api_token: "test-news-token".into(),
    })
}

pub fn sentiment_client(endpoint: &str) -> SentimentClient {
    SentimentClient::new(&SentimentApiConfig {
        endpoint: Url::parse(endpoint).expect("valid endpoint url"),
        api_token: "test-sentiment-token".into(),
    })
}

/// Fresh state wired to mock upstreams. A zero window disables the rate
/// limiter for tests that don't exercise it.
pub fn test_state(news_base: &str, sentiment_endpoint: &str, window: Duration) -> Arc<AppState> {
    Arc::new(AppState {
        news: news_client(news_base),
        sentiment: sentiment_client(sentiment_endpoint),
        cache: NewsCache::new(500, Duration::from_secs(600)),
        rate_limiter: RateLimiter::new(window),
    })
}

/// One provider-shaped raw record.
pub fn raw_record(uuid: &str, published_at: &str, source: &str, symbols: &[&str]) -> Value {
    let entities: Vec<Value> = symbols
        .iter()
        .map(|symbol| json!({ "type": "equity", "symbol": symbol }))
        .collect();

    json!({
        "uuid": uuid,
        "title": format!("Headline {uuid}"),
        "description": format!("Description for {uuid}"),
        "snippet": format!("Snippet for {uuid}"),
        "source": source,
        "url": format!("https://news.example.com/{uuid}"),
        "published_at": published_at,
        "entities": entities
    })
}

pub fn page_body(records: &[Value]) -> String {
    json!({ "data": records }).to_string()
}

/// Ranked classification body with `label`/`score` as the top pair.
pub fn sentiment_body(label: &str, score: f64) -> String {
    json!([[
        { "label": label, "score": score },
        { "label": "neutral", "score": (1.0 - score) / 2.0 },
    ]])
    .to_string()
}

/// A fully-enriched article for seeding the cache directly.
pub fn article(id: &str, source: &str, sentiment: Sentiment, symbols: &[&str]) -> Article {
    Article {
        id: id.into(),
        title: format!("Headline {id}"),
        description: format!("Description for {id}"),
        source: source.into(),
        url: format!("https://news.example.com/{id}"),
        published_at: "2024-12-12T10:30:00Z".parse().unwrap(),
        related_symbols: symbols.iter().map(|s| (*s).to_owned()).collect(),
        sentiment,
        sentiment_score: 0.9,
    }
}
