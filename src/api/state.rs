//! Shared state for all handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::pipeline::{NewsClient, SentimentClient};
use crate::store::{NewsCache, RateLimiter};

/// Cached aggregation results live this long.
pub const NEWS_CACHE_TTL: Duration = Duration::from_secs(600);

/// Bounded entry count for cached results.
pub const NEWS_CACHE_CAPACITY: usize = 500;

/// A repeated request for the same key is rejected inside this window.
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(10);

/// Shared state for all route handlers.
///
/// Clients and stores are owned here and injected via Axum's `State`
/// extractor; tests build their own with fresh stores.
pub struct AppState {
    pub news: NewsClient,
    pub sentiment: SentimentClient,
    pub cache: NewsCache,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Arc<Self> {
        Arc::new(Self {
            news: NewsClient::new(&config.news),
            sentiment: SentimentClient::new(&config.sentiment),
            cache: NewsCache::new(NEWS_CACHE_CAPACITY, NEWS_CACHE_TTL),
            rate_limiter: RateLimiter::new(RATE_LIMIT_WINDOW),
        })
    }
}
