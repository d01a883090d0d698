//! HTTP server for ElectroQuiz.
//!
//! Provides endpoints for:
//! - Chat proxy (`/api/chat`)
//! - PDF text extraction (`/api/pdf`)
//! - Suggested topics (`/api/topics`)
//! - Web-app manifest (`/manifest.webmanifest`)
//! - Health check (`/health`)

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod handlers;
pub mod responses;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/chat", post(handlers::chat))
        .route(
            "/api/pdf",
            post(handlers::extract_pdf).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/topics", get(handlers::list_topics))
        .route("/manifest.webmanifest", get(handlers::manifest))
        // Observability routes
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{http::StatusCode, Json};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use crate::config::UpstreamConfig;
    use crate::document::PdfExtractor;
    use crate::testing::post_json;
    use crate::upstream::GroqClient;

    /// Router wired to a real Groq client pointed at a local stub upstream.
    async fn router_against_upstream(status: StatusCode, body: Value) -> Router {
        let upstream = Router::new().route(
            "/v1/chat/completions",
            post(move || {
                let body = body.clone();
                async move { (status, Json(body)) }
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let client = GroqClient::new(UpstreamConfig {
            api_url: format!("http://{}/v1/chat/completions", addr),
            api_key_var: "ELECTROQUIZ_E2E_KEY".to_string(),
            ..UpstreamConfig::default()
        });
        create_router(AppState::new(Arc::new(client), Arc::new(PdfExtractor)))
    }

    #[tokio::test]
    async fn test_end_to_end_ohms_law() {
        let router = router_against_upstream(
            StatusCode::OK,
            json!({ "choices": [{ "message": { "content": "V=IR" } }] }),
        )
        .await;

        let (status, body) = post_json(
            router,
            "/api/chat",
            json!({ "messages": [{ "role": "user", "content": "What is Ohm's law?" }] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "content": "V=IR" }));
    }

    #[tokio::test]
    async fn test_upstream_body_not_leaked() {
        let router = router_against_upstream(
            StatusCode::UNAUTHORIZED,
            json!({ "error": { "message": "Invalid API Key gsk_live_secret" } }),
        )
        .await;

        let (status, body) = post_json(
            router,
            "/api/chat",
            json!({ "messages": [{ "role": "user", "content": "What is Ohm's law?" }] }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to process your request" }));
        assert!(!body.to_string().contains("gsk_live_secret"));
    }
}
