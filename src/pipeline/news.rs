//! Client for the news provider's paginated search endpoint.

use std::time::Duration;

use url::Url;

use super::wire::NewsPage;
use crate::config::NewsApiConfig;

/// Per-page request timeout.
const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a page fetch produced nothing. Callers only ever see `None`; the
/// error is logged at this boundary.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

/// News provider client. One call fetches one page.
#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: Url,
    api_token: String,
}

impl NewsClient {
    pub fn new(config: &NewsApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_token: config.api_token.clone(),
        }
    }

    /// Fetch one page of raw articles.
    ///
    /// Every failure mode degrades to `None`: a missing page must never
    /// sink the whole aggregation.
    pub async fn fetch_page(
        &self,
        symbols: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Option<NewsPage> {
        match self.try_fetch_page(symbols, page, limit).await {
            Ok(page) => Some(page),
            Err(err) => {
                tracing::warn!(page, %err, "news page fetch failed");
                None
            }
        }
    }

    async fn try_fetch_page(
        &self,
        symbols: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<NewsPage, FetchError> {
        let mut url = self.base_url.join("news/all")?;
        url.query_pairs_mut()
            .append_pair("api_token", &self.api_token)
            .append_pair("symbols", symbols.unwrap_or(""))
            .append_pair("filter_entities", "true")
            .append_pair("language", "en")
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());

        let response = self.http.get(url).timeout(PAGE_TIMEOUT).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response.json::<NewsPage>().await?)
    }
}
