//! Contact form intake and the admin submission listing.
//!
//! Flow:
//! 1. The contact page POSTs /api/contact with name/email/subject/message
//! 2. Payload is validated; every failing rule is reported, naming its field
//! 3. Submissions are rate limited per client address (fixed window)
//! 4. Fields are HTML-escaped and the record is appended to the JSON store
//! 5. The admin view GETs /api/contact for a newest-first slice
//!
//! The listing is gated client-side by the admin login token; the server
//! does not verify the token here.

use axum::{
    Json, Router, debug_handler,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::{DateTime, Duration, Utc};
use garde::Validate;
use rand::Rng;
use shared::api::{ContactListQuery, ContactListResponse, ContactPayload, ContactResponse};

use crate::{
    error::{AppError, validation_details},
    middleware::ClientMeta,
    models::ContactSubmission,
    sanitize::escape_html,
    state::AppState,
};

/// Submissions allowed per address per window.
const RATE_LIMIT_MAX: u32 = 5;
/// Fixed rate-limit window in minutes.
const RATE_LIMIT_WINDOW_MINS: i64 = 15;
/// Default page size for the admin listing.
const DEFAULT_LIST_LIMIT: usize = 50;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_contact).get(list_contacts))
}

/// Millisecond timestamp plus a random alphanumeric suffix. Unique in
/// practice, not collision-checked.
fn generate_id(now: DateTime<Utc>) -> String {
    let suffix: String = rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("{}-{}", now.timestamp_millis(), suffix)
}

#[debug_handler]
async fn submit_contact(
    meta: ClientMeta,
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|report| AppError::Validation(validation_details(&report)))?;

    let now = Utc::now();

    let result = state
        .stores
        .rate_limiter
        .check(
            &meta.ip,
            RATE_LIMIT_MAX,
            Duration::minutes(RATE_LIMIT_WINDOW_MINS),
            now,
        )
        .await?;

    if !result.is_allowed() {
        tracing::warn!(ip = %meta.ip, "contact submission rate limited");
        return Err(AppError::External(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many requests. Try again later.",
        ));
    }

    let submission = ContactSubmission {
        id: generate_id(now),
        name: escape_html(payload.name.trim()),
        email: escape_html(payload.email.trim()),
        subject: escape_html(payload.subject.trim()),
        message: escape_html(payload.message.trim()),
        timestamp: payload.timestamp.unwrap_or(now),
        ip: meta.ip.clone(),
        user_agent: meta.user_agent.clone(),
    };

    state.repos.contacts.append(&submission).await?;

    tracing::info!(id = %submission.id, ip = %meta.ip, "contact submission stored");

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: "Thanks for reaching out! I'll get back to you soon.".to_string(),
            id: submission.id,
        }),
    ))
}

/// Newest-first slice of the stored submissions.
#[debug_handler]
async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<ContactListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let all = state.repos.contacts.list().await?;
    let total = all.len();

    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let skip = query.skip.unwrap_or(0);

    let contacts: Vec<_> = all
        .into_iter()
        .rev()
        .skip(skip)
        .take(limit)
        .map(Into::into)
        .collect();

    Ok(Json(ContactListResponse {
        success: true,
        showing: contacts.len(),
        contacts,
        total,
    }))
}
