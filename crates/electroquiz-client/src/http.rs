//! HTTP client for the ElectroQuiz REST endpoints.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use electroquiz_core::{ChatRequest, ChatResponse, ErrorBody};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// A named group of topics as returned by `GET /api/topics`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicGroup {
    pub name: String,
    pub topics: Vec<String>,
}

/// Suggested topics as returned by `GET /api/topics`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicList {
    pub popular: Vec<String>,
    pub categories: Vec<TopicGroup>,
}

/// HTTP client for the ElectroQuiz server.
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from configuration.
    pub fn with_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            inner: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check if the server is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "Checking health");

        let response = self.inner.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    /// POST /api/chat
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        let url = format!("{}/api/chat", self.base_url);
        debug!(url = %url, messages = request.messages.len(), "POST chat");

        let response = self.inner.post(&url).json(request).send().await?;
        decode(response).await
    }

    /// POST /api/pdf with `bytes` as the `pdf` form field.
    pub async fn extract_pdf(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ChatResponse, ClientError> {
        let url = format!("{}/api/pdf", self.base_url);
        debug!(url = %url, bytes = bytes.len(), "POST pdf");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("pdf", part);

        let response = self.inner.post(&url).multipart(form).send().await?;
        decode(response).await
    }

    /// GET /api/topics
    pub async fn topics(&self) -> Result<TopicList, ClientError> {
        self.get_json("/api/topics").await
    }

    /// Get JSON from an endpoint.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET request");

        let response = self.inner.get(&url).send().await?;
        decode(response).await
    }
}

/// Decode a success body, or turn an error status into [`ClientError::Status`].
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .map(|body| body.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| ClientError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        extract::Multipart,
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    use electroquiz_core::ChatMessage;

    async fn spawn(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let router = Router::new().route(
            "/api/chat",
            post(|Json(req): Json<ChatRequest>| async move {
                let last = req.messages.last().map(|m| m.content.as_str());
                Json(json!({ "content": format!("echo: {}", last.unwrap_or("")) }))
            }),
        );
        let client = HttpClient::new(&spawn(router).await);

        let request = ChatRequest {
            messages: vec![ChatMessage::user("What is Ohm's law?")],
        };
        let response = client.chat(&request).await.unwrap();

        assert_eq!(response.content, "echo: What is Ohm's law?");
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let router = Router::new().route(
            "/api/chat",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to process your request" })),
                )
            }),
        );
        let client = HttpClient::new(&spawn(router).await);

        let result = client.chat(&ChatRequest::default()).await;

        match result {
            Err(ClientError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to process your request");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_extract_pdf_sends_pdf_field() {
        let router = Router::new().route(
            "/api/pdf",
            post(|mut multipart: Multipart| async move {
                let field = multipart.next_field().await.unwrap().unwrap();
                let name = field.name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.unwrap();
                Json(json!({ "content": format!("{}:{}", name, bytes.len()) }))
            }),
        );
        let client = HttpClient::new(&spawn(router).await);

        let response = client
            .extract_pdf("notes.pdf", b"%PDF-1.4".to_vec())
            .await
            .unwrap();

        assert_eq!(response.content, "pdf:8");
    }

    #[tokio::test]
    async fn test_topics_and_health() {
        let router = Router::new()
            .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
            .route(
                "/api/topics",
                get(|| async {
                    Json(json!({
                        "popular": ["Ohm's Law"],
                        "categories": [{ "name": "Circuit Theory", "topics": ["RC and RL Circuits"] }]
                    }))
                }),
            );
        let client = HttpClient::new(&spawn(router).await);

        assert!(client.health().await.unwrap());
        let topics = client.topics().await.unwrap();
        assert_eq!(topics.popular, vec!["Ohm's Law".to_string()]);
        assert_eq!(topics.categories[0].name, "Circuit Theory");
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new(&format!("http://{}", addr));
        let result = client.chat(&ChatRequest::default()).await;

        assert!(matches!(result, Err(ClientError::Http(_))));
    }
}
