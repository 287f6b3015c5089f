//! Ephemeral stores (in-process memory).
//!
//! This module contains traits and implementations for soft-throttle state.
//! Everything here lives in process memory only: it is lost on restart and
//! not shared across instances, so horizontal scaling defeats the throttle.
//! That is acceptable for a low-traffic personal site.
//!
//! ## Stores
//!
//! - **rate_limit** - Fixed-window submission counters per client address
//! - **login_attempts** - Failed admin login counters per client address
//!
//! ## Usage in Handlers
//!
//! Stores are accessed via `state.stores`:
//!
//! ```ignore
//! async fn handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
//!     let result = state.stores.rate_limiter.check(&ip, 5, window, now).await?;
//!     state.stores.login_attempts.reset(&ip).await?;
//! }
//! ```

mod login_attempts;
mod rate_limit;

pub use login_attempts::{InMemoryLoginAttemptStore, LoginAttemptStore};
pub use rate_limit::{InMemoryRateLimiter, RateLimitResult, RateLimiter};

#[cfg(test)]
pub use login_attempts::MockLoginAttemptStore;
#[cfg(test)]
pub use rate_limit::MockRateLimiter;

use std::sync::Arc;

/// Collection of all ephemeral stores.
#[derive(Clone)]
pub struct Stores {
    pub rate_limiter: Arc<dyn RateLimiter>,
    pub login_attempts: Arc<dyn LoginAttemptStore>,
}
