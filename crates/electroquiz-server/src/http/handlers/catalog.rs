//! Static catalog handlers: suggested topics and the web-app manifest.

use axum::{http::header, response::IntoResponse, Json};

use electroquiz_core::{topics, AppManifest};

/// GET /api/topics - Suggested study topics.
pub async fn list_topics() -> impl IntoResponse {
    Json(topics::catalog())
}

/// GET /manifest.webmanifest
pub async fn manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(AppManifest::default()),
    )
}
