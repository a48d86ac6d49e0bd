//! Fixed-window request gate keyed by (scope, symbol filter).

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Independent marker namespaces so a refresh and a standard fetch for the
/// same symbols do not block each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateScope {
    Fetch,
    Refresh,
}

/// Key used when a request carries no symbol filter.
const GENERAL_KEY: &str = "general";

/// Per-key gate: while a live marker exists for a key, new requests for
/// that key are rejected. Markers expire a fixed window after creation;
/// there is no explicit release.
pub struct RateLimiter {
    window: Duration,
    markers: Mutex<HashMap<(RateScope, String), Instant>>,
}

impl RateLimiter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            markers: Mutex::new(HashMap::new()),
        }
    }

    /// Admit the request and record a marker, or reject while a live
    /// marker exists for the key.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    pub fn try_acquire(&self, scope: RateScope, symbols: Option<&str>) -> bool {
        let key = (scope, symbols.unwrap_or(GENERAL_KEY).to_owned());
        let now = Instant::now();

        let mut markers = self.markers.lock().expect("mutex poisoned");
        markers.retain(|_, created| now.duration_since(*created) < self.window);

        if markers.contains_key(&key) {
            return false;
        }
        markers.insert(key, now);
        true
    }

    /// Number of live markers.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        let mut markers = self.markers.lock().expect("mutex poisoned");
        markers.retain(|_, created| now.duration_since(*created) < self.window);
        markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
