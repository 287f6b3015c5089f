use crate::{config::Config, repos::Repos, stores::Stores};

#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Durable repositories (JSON file).
    pub repos: Repos,
    /// Ephemeral stores (process memory).
    pub stores: Stores,
}
