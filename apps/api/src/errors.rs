use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::answer::NoProfileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file format. Please use PDF or TXT files.")]
    UnsupportedFormat,

    #[error(transparent)]
    NoProfile(#[from] NoProfileError),

    #[error("PDF decoding error: {0}")]
    Pdf(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFormat => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                self.to_string(),
            ),
            AppError::NoProfile(e) => (StatusCode::CONFLICT, "NO_PROFILE", e.to_string()),
            AppError::Pdf(msg) => {
                tracing::error!("PDF decoding error: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PDF_DECODE_ERROR",
                    "Could not extract text from the uploaded PDF".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
