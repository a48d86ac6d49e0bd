//! TTL-bounded LRU store of aggregation results.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use tokio::sync::Mutex;

use crate::models::Article;

/// Identity of one aggregation result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewsKey {
    pub symbols: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl NewsKey {
    pub fn new(symbols: Option<&str>, page: u32, limit: u32) -> Self {
        Self {
            symbols: symbols.map(str::to_owned),
            page,
            limit,
        }
    }

    /// The fixed key refresh writes to and stats reads from.
    pub fn canonical(symbols: Option<&str>) -> Self {
        Self::new(symbols, 1, 30)
    }
}

struct Entry {
    articles: Arc<Vec<Article>>,
    expires_at: Instant,
}

/// Capacity-bounded cache of sorted article lists with a fixed TTL.
///
/// Writes fully replace any entry under the same key; expired entries are
/// dropped on the way out of `get`. Internally synchronized so it can be
/// shared across concurrent request handlers.
pub struct NewsCache {
    inner: Mutex<LruCache<NewsKey, Entry>>,
    ttl: Duration,
}

impl NewsCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        // Avoid zero capacity panics
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            inner: Mutex::new(LruCache::new(cap)),
            ttl,
        }
    }

    /// Look up an unexpired entry.
    pub async fn get(&self, key: &NewsKey) -> Option<Arc<Vec<Article>>> {
        let mut guard = self.inner.lock().await;
        if let Some(entry) = guard.get(key) {
            if Instant::now() <= entry.expires_at {
                return Some(Arc::clone(&entry.articles));
            }
            // Expired: drop it so it stops counting toward capacity.
            guard.pop(key);
        }
        None
    }

    /// Store a fully-built result under `key`.
    pub async fn put(&self, key: NewsKey, articles: Vec<Article>) {
        let entry = Entry {
            articles: Arc::new(articles),
            expires_at: Instant::now() + self.ttl,
        };
        self.inner.lock().await.put(key, entry);
    }

    /// Number of entries currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    fn article(id: &str) -> Article {
        Article {
            id: id.into(),
            title: "title".into(),
            description: "description".into(),
            source: "Reuters".into(),
            url: "https://example.com/a".into(),
            published_at: "2024-12-12T10:30:00Z".parse().unwrap(),
            related_symbols: vec!["AAPL".into()],
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.5,
        }
    }

    #[tokio::test]
    async fn put_then_get_returns_stored_value() {
        let cache = NewsCache::new(10, Duration::from_secs(600));
        let key = NewsKey::new(Some("AAPL"), 1, 30);

        cache.put(key.clone(), vec![article("a"), article("b")]).await;

        let hit = cache.get(&key).await.expect("entry should be present");
        assert_eq!(hit.len(), 2);
        assert_eq!(hit[0].id, "a");
    }

    #[tokio::test]
    async fn expired_entry_is_a_miss() {
        let cache = NewsCache::new(10, Duration::from_millis(10));
        let key = NewsKey::new(None, 1, 30);

        cache.put(key.clone(), vec![article("a")]).await;
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(cache.get(&key).await.is_none());
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn put_replaces_existing_entry() {
        let cache = NewsCache::new(10, Duration::from_secs(600));
        let key = NewsKey::canonical(Some("AAPL"));

        cache.put(key.clone(), vec![article("old")]).await;
        cache.put(key.clone(), vec![article("new")]).await;

        let hit = cache.get(&key).await.unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].id, "new");
    }

    #[tokio::test]
    async fn capacity_overflow_evicts_least_recently_used() {
        let cache = NewsCache::new(2, Duration::from_secs(600));
        let first = NewsKey::new(Some("AAPL"), 1, 30);
        let second = NewsKey::new(Some("MSFT"), 1, 30);
        let third = NewsKey::new(Some("TSLA"), 1, 30);

        cache.put(first.clone(), vec![article("a")]).await;
        cache.put(second.clone(), vec![article("b")]).await;
        cache.put(third.clone(), vec![article("c")]).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get(&first).await.is_none());
        assert!(cache.get(&second).await.is_some());
        assert!(cache.get(&third).await.is_some());
    }

    #[test]
    fn canonical_key_is_page_one_limit_thirty() {
        let key = NewsKey::canonical(Some("AAPL,MSFT"));
        assert_eq!(key.symbols.as_deref(), Some("AAPL,MSFT"));
        assert_eq!(key.page, 1);
        assert_eq!(key.limit, 30);
    }
}
