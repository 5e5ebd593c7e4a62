// region:    --- Imports
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

// endregion: --- Imports

// region:    --- App Error
/// 입력 검증 실패 필드
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error accessing database: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Tender not found.")]
    NotFound,

    #[error("Invalid form input")]
    Validation(Vec<FieldError>),

    #[error("Tender has not started yet.")]
    NotStarted,

    #[error("Tender has already ended.")]
    Concluded,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store(e) => {
                error!("{:<12} --> 저장소 오류: {}", "Error", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Error accessing database." })),
                )
                    .into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Tender not found." })),
            )
                .into_response(),
            AppError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Invalid form input",
                    "fields": fields,
                })),
            )
                .into_response(),
            AppError::NotStarted => (
                StatusCode::CONFLICT,
                Json(serde_json::json!({
                    "error": "Tender has not started yet.",
                    "code": "NOT_STARTED"
                })),
            )
                .into_response(),
            AppError::Concluded => (
                StatusCode::CONFLICT,
                Json(serde_json::json!({
                    "error": "Tender has already ended.",
                    "code": "ALREADY_ENDED"
                })),
            )
                .into_response(),
        }
    }
}

// endregion: --- App Error
