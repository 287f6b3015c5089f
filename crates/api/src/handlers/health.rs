//! Health check endpoint for load balancers and monitoring.
//!
//! Returns 200 OK if the service is healthy (submission store readable),
//! 503 Service Unavailable otherwise.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    store: bool,
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store_ok = state.repos.contacts.list().await.is_ok();

    let response = HealthResponse {
        status: if store_ok { "ok" } else { "unhealthy" },
        store: store_ok,
    };

    let status = if store_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::MockContactRepo;
    use crate::test_utils::TestStateBuilder;

    #[tokio::test]
    async fn healthy_when_store_readable() {
        let mut repo = MockContactRepo::new();
        repo.expect_list().returning(|| Ok(Vec::new()));

        let state = TestStateBuilder::new().with_contact_repo(repo).build();

        let response = health_check(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unhealthy_when_store_unreadable() {
        let mut repo = MockContactRepo::new();
        repo.expect_list()
            .returning(|| Err(anyhow::anyhow!("corrupt store")));

        let state = TestStateBuilder::new().with_contact_repo(repo).build();

        let response = health_check(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
