//! In-memory stores owned by the process: the TTL-bounded result cache
//! and the fixed-window rate limiter. Both are created once at startup
//! and injected into handler state, so tests get fresh stores per test.

pub mod cache;
pub mod rate_limit;

pub use cache::{NewsCache, NewsKey};
pub use rate_limit::{RateLimiter, RateScope};
