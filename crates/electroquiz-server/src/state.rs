//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::document::{PdfExtractor, TextExtractor};
use crate::upstream::{ChatCompletion, GroqClient};

/// Shared application state.
///
/// Holds only the request-independent collaborators; no per-request data
/// lives here.
pub struct AppState {
    /// Hosted chat completion service.
    pub chat: Arc<dyn ChatCompletion>,

    /// PDF text extractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    /// Create a new AppState wrapped in Arc.
    pub fn new(chat: Arc<dyn ChatCompletion>, extractor: Arc<dyn TextExtractor>) -> Arc<Self> {
        Arc::new(Self { chat, extractor })
    }

    /// Create the production state: Groq upstream and `pdf-extract`.
    pub fn from_config(config: &Config) -> Arc<Self> {
        Self::new(
            Arc::new(GroqClient::new(config.upstream.clone())),
            Arc::new(PdfExtractor),
        )
    }
}
