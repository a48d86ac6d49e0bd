//! HTTP route handlers.
//!
//! Each news request walks the same path: rate-limit gate, cache lookup,
//! aggregation pipeline, cache write, response. Rate-limit rejection is
//! the only user-visible error on the happy paths; upstream failures are
//! absorbed below the pipeline boundary.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use super::dto::{self, HealthResponse, ServiceInfo, StatsResponse};
use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::models::Article;
use crate::pipeline;
use crate::store::{NewsKey, RateScope};

/// Per-page size used by refresh fetches.
const REFRESH_PAGE_LIMIT: u32 = 10;

/// Query parameters for the news listing endpoint.
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub symbols: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    30
}

/// Query parameters for the refresh and stats endpoints.
#[derive(Debug, Deserialize)]
pub struct SymbolsQuery {
    pub symbols: Option<String>,
}

/// GET / - Service metadata.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to News Sentiment API",
        version: env!("CARGO_PKG_VERSION"),
        features: ["Multi-page fetching", "Sentiment analysis", "Rate limiting"],
    })
}

/// GET /health - Liveness probe with store sizes.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now(),
        cache_size: state.cache.len().await,
        rate_limit_cache_size: state.rate_limiter.len(),
    })
}

/// GET /api/news - Cached news listing.
///
/// `page` and `limit` key the cache; the upstream fan-out always covers
/// pages 1-4 with a per-page size of `limit / 3`.
pub async fn list_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> ApiResult<Json<Vec<Article>>> {
    let symbols = query.symbols.as_deref();

    if !state.rate_limiter.try_acquire(RateScope::Fetch, symbols) {
        return Err(ApiError::RateLimited(
            "Too many requests. Please wait 10 seconds between requests.".into(),
        ));
    }

    let key = NewsKey::new(symbols, query.page, query.limit);
    if let Some(cached) = state.cache.get(&key).await {
        return Ok(Json(cached.as_ref().clone()));
    }

    let articles =
        pipeline::aggregate(&state.news, &state.sentiment, symbols, query.limit / 3).await;

    if !articles.is_empty() {
        state.cache.put(key, articles.clone()).await;
    }
    // An empty result is served uncached so the next request retries upstream.
    Ok(Json(articles))
}

/// GET /api/news/refresh - Fetch fresh data, bypassing the cache check.
pub async fn refresh_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolsQuery>,
) -> ApiResult<Json<Vec<Article>>> {
    let symbols = query.symbols.as_deref();

    if !state.rate_limiter.try_acquire(RateScope::Refresh, symbols) {
        return Err(ApiError::RateLimited(
            "Too many requests. Please wait 10 seconds between refreshes.".into(),
        ));
    }

    let articles =
        pipeline::aggregate(&state.news, &state.sentiment, symbols, REFRESH_PAGE_LIMIT).await;

    if !articles.is_empty() {
        // Standard reads use the canonical key, so refreshed data lands there.
        state
            .cache
            .put(NewsKey::canonical(symbols), articles.clone())
            .await;
    }
    Ok(Json(articles))
}

/// GET /api/stats - Statistics over the canonical cached entry.
///
/// Never triggers a fetch; an absent entry yields the no-data status.
pub async fn stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolsQuery>,
) -> ApiResult<Json<StatsResponse>> {
    let key = NewsKey::canonical(query.symbols.as_deref());

    let response = match state.cache.get(&key).await {
        Some(articles) => StatsResponse::Ready(dto::compute_stats(&articles)),
        None => StatsResponse::no_data(),
    };

    Ok(Json(response))
}
