use anyhow::Context;
use tracing_subscriber::EnvFilter;

use news_sentiment_api::{api, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;
    let state = AppState::from_config(&config);
    let app = api::create_app(state, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "news sentiment service listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
