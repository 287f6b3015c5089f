//! Shared API request/response types used by the site frontend and API server.

use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

/// Contact form submission from the site's contact page.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ContactPayload {
    #[garde(length(chars, min = 2, max = 100))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(chars, min = 5, max = 200))]
    pub subject: String,
    #[garde(length(chars, min = 10, max = 5000))]
    pub message: String,
    /// Client-side timestamp, used when present; the server clock fills
    /// the stored record otherwise.
    #[garde(skip)]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Returned after a submission is accepted.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// Query parameters for the admin submission listing.
#[derive(Debug, Default, Deserialize)]
pub struct ContactListQuery {
    /// Max entries to return (default 50).
    pub limit: Option<usize>,
    /// Entries to skip from the newest end (default 0).
    pub skip: Option<usize>,
}

/// A stored submission as shown in the admin view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub ip: String,
    pub user_agent: Option<String>,
}

/// Newest-first page of stored submissions.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactListResponse {
    pub success: bool,
    pub contacts: Vec<ContactEntry>,
    /// Total submissions on disk, before slicing.
    pub total: usize,
    /// Number of entries in this response.
    pub showing: usize,
}

/// Admin login request.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[garde(length(min = 1))]
    pub password: String,
}

/// Returned on successful admin login. The token is a client-side expiry
/// marker only; the server does not verify it on later requests.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    /// Seconds until the client should discard the token.
    pub expires_in: u64,
}

/// Error envelope returned for 4xx/5xx responses.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    /// Per-field validation messages, present on 400s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    /// Login attempts left before lockout, present on failed logins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_attempts: Option<u32>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
            remaining_attempts: None,
        }
    }
}
