use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path to the JSON file holding contact submissions.
    #[serde(default = "default_contacts_file")]
    pub contacts_file: PathBuf,
    /// Admin password for the submissions view. Override in any real deployment.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    /// Set to "production" for JSON logging, anything else for human-readable.
    #[serde(default)]
    pub env: String,
    /// Sentry DSN for error tracking (Better Stack compatible)
    #[serde(default)]
    pub sentry_dsn: Option<String>,
}

fn default_contacts_file() -> PathBuf {
    PathBuf::from("data/contacts.json")
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

impl Config {
    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}
