//! Failed admin login tracking in process memory.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

/// Per-address failed login record. Held only in process memory and lost on
/// restart; this is a soft throttle, not a security control.
#[derive(Debug, Clone, Copy)]
pub struct AttemptRecord {
    pub count: u32,
    pub last_attempt: DateTime<Utc>,
}

/// Store for failed admin login attempts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginAttemptStore: Send + Sync {
    /// Failures recorded for `key` within the window ending at `now`.
    /// Returns 0 once the window has elapsed since the last attempt.
    async fn failures(&self, key: &str, window: Duration, now: DateTime<Utc>) -> Result<u32>;

    /// Record a failed attempt and return the updated count. Restarts the
    /// count when the window has elapsed since the last attempt.
    async fn record_failure(&self, key: &str, window: Duration, now: DateTime<Utc>)
    -> Result<u32>;

    /// Clear the record for `key` (called on successful login).
    async fn reset(&self, key: &str) -> Result<()>;
}

/// In-memory implementation of LoginAttemptStore.
#[derive(Default)]
pub struct InMemoryLoginAttemptStore {
    attempts: Mutex<HashMap<String, AttemptRecord>>,
}

impl InMemoryLoginAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoginAttemptStore for InMemoryLoginAttemptStore {
    async fn failures(&self, key: &str, window: Duration, now: DateTime<Utc>) -> Result<u32> {
        let attempts = self
            .attempts
            .lock()
            .map_err(|_| anyhow!("login attempt mutex poisoned"))?;

        Ok(match attempts.get(key) {
            Some(record) if now - record.last_attempt < window => record.count,
            _ => 0,
        })
    }

    async fn record_failure(
        &self,
        key: &str,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<u32> {
        let mut attempts = self
            .attempts
            .lock()
            .map_err(|_| anyhow!("login attempt mutex poisoned"))?;

        let record = attempts
            .entry(key.to_string())
            .and_modify(|r| {
                if now - r.last_attempt >= window {
                    r.count = 0;
                }
                r.count += 1;
                r.last_attempt = now;
            })
            .or_insert(AttemptRecord {
                count: 1,
                last_attempt: now,
            });

        Ok(record.count)
    }

    async fn reset(&self, key: &str) -> Result<()> {
        let mut attempts = self
            .attempts
            .lock()
            .map_err(|_| anyhow!("login attempt mutex poisoned"))?;
        attempts.remove(key);
        Ok(())
    }
}
