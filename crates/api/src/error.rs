use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sprintboard_airtable::StoreError;
use sprintboard_core::error::CoreError;

pub type AppResult<T> = Result<T, AppError>;

/// API-level error type. Converts lower-layer errors into HTTP responses
/// with a stable JSON shape: `{"error": "...", "code": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0} introuvable")]
    NotFound(&'static str),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Store(StoreError::Config(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            AppError::Store(StoreError::Api { .. }) => (StatusCode::BAD_GATEWAY, "STORE_ERROR"),
            AppError::Store(StoreError::Request(_)) => {
                (StatusCode::BAD_GATEWAY, "STORE_UNREACHABLE")
            }
            AppError::Store(StoreError::Decode(_)) => (StatusCode::BAD_GATEWAY, "STORE_ERROR"),
            AppError::Store(StoreError::PaginationExceeded { .. }) => {
                (StatusCode::BAD_GATEWAY, "PAGINATION_EXCEEDED")
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code, %message, "request failed");
        } else {
            tracing::debug!(code, %message, "request rejected");
        }

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
