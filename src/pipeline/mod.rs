//! News aggregation pipeline: concurrent multi-page fetch, per-article
//! transformation, sentiment enrichment, merge and sort.

pub mod news;
pub mod sentiment;
pub mod transform;
pub mod wire;

pub use news::NewsClient;
pub use sentiment::SentimentClient;
pub use transform::ArticleDraft;

use futures::future::join_all;

use crate::models::Article;

/// Pages fetched per aggregation. Fixed fan-out, not cursor pagination.
const PAGE_FAN_OUT: u32 = 4;

/// Fetch [`PAGE_FAN_OUT`] pages concurrently, enrich every surviving
/// article with sentiment, and return the combined list sorted by publish
/// time, newest first.
///
/// Failed pages contribute nothing; if every page fails the result is an
/// empty list. This function never returns an error.
pub async fn aggregate(
    news: &NewsClient,
    sentiment: &SentimentClient,
    symbols: Option<&str>,
    page_limit: u32,
) -> Vec<Article> {
    let fetches = (1..=PAGE_FAN_OUT).map(|page| news.fetch_page(symbols, page, page_limit));
    let pages = join_all(fetches).await;

    let mut articles = Vec::new();
    for page in pages.into_iter().flatten() {
        for draft in transform::transform(&page) {
            let text = format!("{}. {}", draft.title, draft.description);
            let (label, score) = sentiment.classify(&text).await;
            articles.push(draft.into_article(label, score));
        }
    }

    // Stable sort: articles with equal timestamps keep their input order.
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    articles
}
