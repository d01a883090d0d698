//! POST /api/pdf - extract the text of an uploaded PDF.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    Json,
};
use tracing::{error, info, warn};

use electroquiz_core::ChatResponse;

use crate::document::{join_pages, UploadedDocument};
use crate::http::responses::{ApiError, NO_PDF_PROVIDED, PDF_FAILURE};
use crate::state::AppState;

/// Multipart field carrying the document.
pub const PDF_FIELD: &str = "pdf";

/// Read the `pdf` field fully into memory and return its pages' text joined by spaces.
pub async fn extract_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        error!(error = %e, "Invalid multipart request");
        ApiError::Processing(PDF_FAILURE)
    })?;

    let bytes = match read_pdf_field(&mut multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            warn!("Upload has no '{}' field", PDF_FIELD);
            return Err(ApiError::Validation(NO_PDF_PROVIDED));
        }
        Err(e) => {
            error!(error = %e, "Failed to read uploaded PDF");
            return Err(ApiError::Processing(PDF_FAILURE));
        }
    };

    info!(bytes = bytes.len(), "Extracting text from PDF");

    let pages = state
        .extractor
        .extract_pages(UploadedDocument::pdf(bytes))
        .await
        .map_err(|e| {
            error!(error = %e, "Error processing PDF");
            ApiError::Processing(PDF_FAILURE)
        })?;

    info!(pages = pages.len(), "PDF text extracted");
    Ok(Json(ChatResponse {
        content: join_pages(&pages),
    }))
}

async fn read_pdf_field(multipart: &mut Multipart) -> Result<Option<Bytes>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(PDF_FIELD) {
            return field.bytes().await.map(Some);
        }
    }
    Ok(None)
}
