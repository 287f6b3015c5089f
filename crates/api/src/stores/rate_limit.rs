//! Fixed-window rate limiting in process memory.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

/// Rate limiter trait for checking and incrementing counters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Count an event against `key` in the fixed window containing `now`.
    /// Returns Allowed with the new count while under the limit, Exceeded once over.
    async fn check(
        &self,
        key: &str,
        limit: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<RateLimitResult>;
}

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitResult {
    /// Under the limit, includes current count.
    Allowed(u32),
    /// Over the limit, includes current count.
    Exceeded(u32),
}

impl RateLimitResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed(_))
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: DateTime<Utc>,
    count: u32,
}

/// In-memory implementation of RateLimiter.
///
/// Counters live in an unbounded map with no eviction; a long-running
/// process accumulates an entry per distinct key. Accepted trade-off for
/// this traffic level.
#[derive(Default)]
pub struct InMemoryRateLimiter {
    windows: Mutex<HashMap<String, Window>>,
}

impl InMemoryRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(
        &self,
        key: &str,
        limit: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<RateLimitResult> {
        let mut windows = self
            .windows
            .lock()
            .map_err(|_| anyhow!("rate limiter mutex poisoned"))?;

        let entry = windows
            .entry(key.to_string())
            .and_modify(|w| {
                if now - w.started_at >= window {
                    // Window elapsed, start a fresh one
                    w.started_at = now;
                    w.count = 0;
                }
            })
            .or_insert(Window {
                started_at: now,
                count: 0,
            });

        entry.count += 1;

        if entry.count > limit {
            Ok(RateLimitResult::Exceeded(entry.count))
        } else {
            Ok(RateLimitResult::Allowed(entry.count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Duration {
        Duration::minutes(15)
    }

    #[tokio::test]
    async fn allows_up_to_limit() {
        let limiter = InMemoryRateLimiter::new();
        let now = Utc::now();

        for i in 1..=5 {
            let result = limiter
                .check("203.0.113.7", 5, window(), now)
                .await
                .unwrap();
            assert_eq!(result, RateLimitResult::Allowed(i));
        }
    }

    #[tokio::test]
    async fn sixth_request_in_window_is_exceeded() {
        let limiter = InMemoryRateLimiter::new();
        let now = Utc::now();

        for _ in 0..5 {
            limiter.check("203.0.113.7", 5, window(), now).await.unwrap();
        }

        let result = limiter.check("203.0.113.7", 5, window(), now).await.unwrap();
        assert_eq!(result, RateLimitResult::Exceeded(6));
        assert!(!result.is_allowed());
    }

    #[tokio::test]
    async fn fresh_window_after_expiry() {
        let limiter = InMemoryRateLimiter::new();
        let now = Utc::now();

        for _ in 0..6 {
            limiter.check("203.0.113.7", 5, window(), now).await.unwrap();
        }

        let later = now + window();
        let result = limiter.check("203.0.113.7", 5, window(), later).await.unwrap();
        assert_eq!(result, RateLimitResult::Allowed(1));
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let limiter = InMemoryRateLimiter::new();
        let now = Utc::now();

        for _ in 0..6 {
            limiter.check("203.0.113.7", 5, window(), now).await.unwrap();
        }

        let result = limiter.check("198.51.100.1", 5, window(), now).await.unwrap();
        assert_eq!(result, RateLimitResult::Allowed(1));
    }

    #[tokio::test]
    async fn poisoned_map_is_an_error_not_a_panic() {
        let limiter = std::sync::Arc::new(InMemoryRateLimiter::new());

        // Poison the mutex by panicking while holding the guard
        let poisoner = limiter.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.windows.lock().unwrap();
            panic!("poison");
        })
        .join();

        let result = limiter.check("203.0.113.7", 5, window(), Utc::now()).await;
        assert!(result.is_err());
    }
}
