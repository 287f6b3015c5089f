use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::api::ErrorBody;

#[derive(Debug)]
pub enum AppError {
    /// Internal errors - logged but return generic 500 to user
    Internal(anyhow::Error),
    /// User-facing errors - message is safe to show
    External(StatusCode, &'static str),
    /// Validation errors - one message per failing field, safe to show
    Validation(Vec<String>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Internal(err) => {
                tracing::error!("internal error: {:?}", err);
                sentry::capture_error(
                    err.as_ref() as &(dyn std::error::Error + Send + Sync + 'static)
                );

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new("Internal server error")),
                )
                    .into_response()
            }
            AppError::External(status, msg) => (status, Json(ErrorBody::new(msg))).into_response(),
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    details: Some(details),
                    ..ErrorBody::new("Validation failed")
                }),
            )
                .into_response(),
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

/// Flattens a garde report into "field: message" lines for the error envelope.
pub fn validation_details(report: &garde::Report) -> Vec<String> {
    report
        .iter()
        .map(|(path, error)| format!("{path}: {error}"))
        .collect()
}
