//! HTTP surface: router, handlers, shared state, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Create the Axum application with all routes.
pub fn create_app(state: Arc<AppState>, config: &AppConfig) -> Router {
    let cors = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(origin = %config.cors_origin, "invalid CORS origin, allowing any");
            CorsLayer::permissive()
        }
    };

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/news", get(handlers::list_news))
        .route("/api/news/refresh", get(handlers::refresh_news))
        .route("/api/stats", get(handlers::stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
