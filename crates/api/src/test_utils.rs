//! Shared test utilities for API handler tests.
//!
//! Provides common mock factories and a flexible `TestStateBuilder` for
//! constructing `AppState` instances with only the mocks needed for each test.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::test_utils::{TestStateBuilder, mock_submission};
//!
//! let mut repo = MockContactRepo::new();
//! repo.expect_list().returning(|| Ok(vec![mock_submission("abc")]));
//!
//! let state = TestStateBuilder::new()
//!     .with_contact_repo(repo)
//!     .build();
//! ```

use std::sync::Arc;

use chrono::Utc;

use crate::config::Config;
use crate::models::ContactSubmission;
use crate::repos::{MockContactRepo, Repos};
use crate::state::AppState;
use crate::stores::{MockLoginAttemptStore, MockRateLimiter, Stores};

/// Creates a test configuration with dummy values.
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 3000,
        contacts_file: "test-contacts.json".into(),
        admin_password: "correct-horse".to_string(),
        env: "test".to_string(),
        sentry_dsn: None,
    }
}

/// Creates a stored submission with the given id.
pub fn mock_submission(id: &str) -> ContactSubmission {
    ContactSubmission {
        id: id.to_string(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Project inquiry".to_string(),
        message: "I'd like to discuss a new web project.".to_string(),
        timestamp: Utc::now(),
        ip: "203.0.113.7".to_string(),
        user_agent: Some("test-agent".to_string()),
    }
}

/// Builder for constructing test `AppState` with custom mocks.
///
/// Uses default (empty) mocks for any repo/store not explicitly set.
/// This allows tests to only configure the mocks they actually need.
pub struct TestStateBuilder {
    contact_repo: Option<MockContactRepo>,
    rate_limiter: Option<MockRateLimiter>,
    login_attempts: Option<MockLoginAttemptStore>,
}

impl TestStateBuilder {
    /// Creates a new builder with no mocks configured.
    pub fn new() -> Self {
        Self {
            contact_repo: None,
            rate_limiter: None,
            login_attempts: None,
        }
    }

    pub fn with_contact_repo(mut self, repo: MockContactRepo) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    pub fn with_rate_limiter(mut self, limiter: MockRateLimiter) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    pub fn with_login_attempts(mut self, store: MockLoginAttemptStore) -> Self {
        self.login_attempts = Some(store);
        self
    }

    /// Builds the `AppState` using configured mocks or defaults.
    pub fn build(self) -> AppState {
        let repos = Repos {
            contacts: Arc::new(self.contact_repo.unwrap_or_else(MockContactRepo::new)),
        };

        let stores = Stores {
            rate_limiter: Arc::new(self.rate_limiter.unwrap_or_else(MockRateLimiter::new)),
            login_attempts: Arc::new(
                self.login_attempts
                    .unwrap_or_else(MockLoginAttemptStore::new),
            ),
        };

        AppState {
            config: test_config(),
            repos,
            stores,
        }
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
