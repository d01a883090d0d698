//! Test doubles and request helpers shared by the handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use electroquiz_core::ChatMessage;

use crate::document::{ExtractError, TextExtractor, UploadedDocument};
use crate::http::create_router;
use crate::state::AppState;
use crate::upstream::{ChatCompletion, UpstreamError};

pub(crate) const BOUNDARY: &str = "electroquiz-test-boundary";
pub(crate) const MULTIPART_CONTENT_TYPE: &str =
    "multipart/form-data; boundary=electroquiz-test-boundary";

/// Chat completion stub that records what it was sent.
pub(crate) struct StubChat {
    reply: Result<String, fn() -> UpstreamError>,
    calls: AtomicUsize,
    last: Mutex<Option<Vec<ChatMessage>>>,
}

impl StubChat {
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub(crate) fn failing(error: fn() -> UpstreamError) -> Self {
        Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for StubChat {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(messages);
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(error) => Err(error()),
        }
    }
}

/// Extractor stub returning fixed pages.
pub(crate) struct StubExtractor {
    pages: Result<Vec<String>, fn() -> ExtractError>,
    calls: AtomicUsize,
    last: Mutex<Option<UploadedDocument>>,
}

impl StubExtractor {
    pub(crate) fn pages(pages: &[&str]) -> Self {
        Self {
            pages: Ok(pages.iter().map(|p| p.to_string()).collect()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub(crate) fn failing(error: fn() -> ExtractError) -> Self {
        Self {
            pages: Err(error),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_document(&self) -> Option<UploadedDocument> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextExtractor for StubExtractor {
    async fn extract_pages(&self, document: UploadedDocument) -> Result<Vec<String>, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(document);
        match &self.pages {
            Ok(pages) => Ok(pages.clone()),
            Err(error) => Err(error()),
        }
    }
}

/// Router backed by a chat stub replying `V=IR` and a one-page extractor.
pub(crate) fn test_router() -> (Router, Arc<StubChat>, Arc<StubExtractor>) {
    test_router_with(StubChat::replying("V=IR"), StubExtractor::pages(&["page"]))
}

pub(crate) fn test_router_with(
    chat: StubChat,
    extractor: StubExtractor,
) -> (Router, Arc<StubChat>, Arc<StubExtractor>) {
    let chat = Arc::new(chat);
    let extractor = Arc::new(extractor);
    let state = AppState::new(chat.clone(), extractor.clone());
    (create_router(state), chat, extractor)
}

/// Drive one request through the router and decode the JSON body.
pub(crate) async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub(crate) async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub(crate) async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let body = serde_json::to_vec(&body).unwrap();
    post_raw(router, uri, "application/json", body).await
}

pub(crate) async fn post_raw(
    router: Router,
    uri: &str,
    content_type: &str,
    body: Vec<u8>,
) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    send(router, request).await
}

/// Encode `(field name, file name, bytes)` triples as a multipart form body.
pub(crate) fn multipart_body(fields: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, bytes) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}
