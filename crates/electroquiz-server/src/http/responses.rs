//! HTTP error type and client-facing messages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use electroquiz_core::ErrorBody;

/// Returned for every chat proxy failure.
pub const CHAT_FAILURE: &str = "Failed to process your request";

/// Returned for every PDF extraction failure.
pub const PDF_FAILURE: &str = "Failed to process PDF";

/// Returned when the upload has no `pdf` field.
pub const NO_PDF_PROVIDED: &str = "No PDF file provided";

/// Errors surfaced to HTTP callers.
///
/// Messages are generic; the underlying cause is logged, never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required input missing (400).
    #[error("{0}")]
    Validation(&'static str),

    /// A downstream dependency failed (500).
    #[error("{0}")]
    Processing(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
