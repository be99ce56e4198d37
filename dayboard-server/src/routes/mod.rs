pub mod calendar;
pub mod google;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::state::AppState;

/// All endpoints, mounted under `/api`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new().merge(google::router()).merge(calendar::router()),
        )
        .with_state(state)
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON error body with a status code. Internal causes are logged, never sent.
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn unauthorized(message: &str) -> Self {
        AppError {
            status: StatusCode::UNAUTHORIZED,
            message: message.to_string(),
        }
    }

    pub fn internal(err: anyhow::Error, message: &str) -> Self {
        error!(error = %format!("{:#}", err), "{}", message);
        AppError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err.into(), "Internal server error")
    }
}
