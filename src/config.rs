//! Environment-driven configuration, loaded once at startup and immutable
//! for the process lifetime.

use url::Url;

const DEFAULT_NEWS_BASE_URL: &str = "https://api.marketaux.com/v1/";
const DEFAULT_SENTIMENT_ENDPOINT: &str = "https://api-inference.huggingface.co/models/mrm8488/distilroberta-finetuned-financial-news-sentiment-analysis";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_PORT: u16 = 3000;

/// Configuration error raised during startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid URL in {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// News provider connection settings.
#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    /// Base URL the paginated search endpoint is joined onto.
    pub base_url: Url,
    pub api_token: String,
}

/// Sentiment inference connection settings.
#[derive(Debug, Clone)]
pub struct SentimentApiConfig {
    /// Full classification endpoint URL.
    pub endpoint: Url,
    pub api_token: String,
}

/// Process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub news: NewsApiConfig,
    pub sentiment: SentimentApiConfig,
    pub port: u16,
    pub cors_origin: String,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    /// Fails when a required API token is absent or a URL override does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let news = NewsApiConfig {
            base_url: url_var("MARKETAUX_BASE_URL", DEFAULT_NEWS_BASE_URL)?,
            api_token: require_var("MARKETAUX_API_TOKEN")?,
        };

        let sentiment = SentimentApiConfig {
            endpoint: url_var("HUGGINGFACE_API_URL", DEFAULT_SENTIMENT_ENDPOINT)?,
            api_token: require_var("HUGGINGFACE_API_TOKEN")?,
        };

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origin =
            std::env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.into());

        Ok(Self {
            news,
            sentiment,
            port,
            cors_origin,
        })
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn require_var(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingVar(var))
}

fn url_var(var: &'static str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_owned());
    Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { var, source })
}
