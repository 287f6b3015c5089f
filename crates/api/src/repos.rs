//! Durable repositories (flat-file JSON).
//!
//! This module contains traits and implementations for persistent storage.
//! Each repository is abstracted behind a trait to enable mocking in tests.
//!
//! ## Repositories
//!
//! - **contacts** - Append-only contact submission storage
//!
//! ## Usage in Handlers
//!
//! Repositories are accessed via `state.repos`:
//!
//! ```ignore
//! async fn handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
//!     state.repos.contacts.append(&submission).await?;
//!     let all = state.repos.contacts.list().await?;
//! }
//! ```

mod contacts;

pub use contacts::{ContactRepo, JsonFileContactRepo};

#[cfg(test)]
pub use contacts::MockContactRepo;

use std::sync::Arc;

/// Collection of all durable repositories.
#[derive(Clone)]
pub struct Repos {
    pub contacts: Arc<dyn ContactRepo>,
}
