use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::api::ContactEntry;

/// Contact submission persisted in the JSON store.
///
/// Records are append-only: never mutated or deleted once written. The id is
/// a millisecond timestamp plus a random suffix, unique in practice but not
/// collision-checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub ip: String,
    pub user_agent: Option<String>,
}

impl From<ContactSubmission> for ContactEntry {
    fn from(s: ContactSubmission) -> Self {
        ContactEntry {
            id: s.id,
            name: s.name,
            email: s.email,
            subject: s.subject,
            message: s.message,
            timestamp: s.timestamp,
            ip: s.ip,
            user_agent: s.user_agent,
        }
    }
}
