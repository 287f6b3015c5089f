//! Password-gated admin login.
//!
//! Flow:
//! 1. The admin page POSTs /api/auth with a plaintext password
//! 2. While an address is locked out, attempts are rejected outright
//! 3. On a match, the failure counter resets and a token is returned
//! 4. The token is SHA-256 of the password and the current millis; the
//!    client stores it with an expiry and the server never verifies it on
//!    later requests - it is an expiry marker, not a bearer credential
//! 5. On a mismatch, the failure counter increments; 5 failures within
//!    15 minutes lock the address out for the rest of the window

use axum::{
    Json, Router, debug_handler,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Duration, Utc};
use garde::Validate;
use sha2::{Digest, Sha256};
use shared::api::{ErrorBody, LoginPayload, LoginResponse};

use crate::{
    error::{AppError, validation_details},
    middleware::ClientMeta,
    state::AppState,
};

/// Failed attempts allowed per address per window.
const MAX_LOGIN_ATTEMPTS: u32 = 5;
/// Lockout window in minutes.
const LOCKOUT_WINDOW_MINS: i64 = 15;
/// Client-side token lifetime in seconds (24 hours).
const TOKEN_EXPIRES_IN_SECS: u64 = 24 * 60 * 60;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(login))
}

#[debug_handler]
async fn login(
    meta: ClientMeta,
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Response, AppError> {
    payload
        .validate()
        .map_err(|report| AppError::Validation(validation_details(&report)))?;

    let now = Utc::now();
    let window = Duration::minutes(LOCKOUT_WINDOW_MINS);

    // Locked-out addresses are rejected before the password is even compared
    let failures = state
        .stores
        .login_attempts
        .failures(&meta.ip, window, now)
        .await?;

    if failures >= MAX_LOGIN_ATTEMPTS {
        tracing::warn!(ip = %meta.ip, "login attempt while locked out");
        return Err(AppError::External(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many login attempts. Try again later.",
        ));
    }

    if payload.password != state.config.admin_password {
        let count = state
            .stores
            .login_attempts
            .record_failure(&meta.ip, window, now)
            .await?;
        let remaining = MAX_LOGIN_ATTEMPTS.saturating_sub(count);

        tracing::warn!(ip = %meta.ip, remaining, "failed admin login");

        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                remaining_attempts: Some(remaining),
                ..ErrorBody::new("Invalid password")
            }),
        )
            .into_response());
    }

    state.stores.login_attempts.reset(&meta.ip).await?;

    // Hash of password + current millis. Opaque to the client, never checked
    // again by the server.
    let mut hasher = Sha256::new();
    hasher.update(payload.password.as_bytes());
    hasher.update(now.timestamp_millis().to_string().as_bytes());
    let token = hex::encode(hasher.finalize());

    tracing::info!(ip = %meta.ip, "admin login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        token,
        expires_in: TOKEN_EXPIRES_IN_SECS,
    })
    .into_response())
}
