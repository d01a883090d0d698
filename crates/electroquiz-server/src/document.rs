//! PDF text extraction.
//!
//! Parsing is delegated to `pdf-extract`; this module only feeds it bytes and
//! stitches the per-page text back together.

use async_trait::async_trait;
use thiserror::Error;

/// Media type attached to uploads handed to the extractor.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Separator placed between page texts.
pub const PAGE_SEPARATOR: &str = " ";

/// An uploaded document held in memory for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
}

impl UploadedDocument {
    /// Wrap raw upload bytes as a PDF.
    pub fn pdf(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: PDF_MEDIA_TYPE,
        }
    }
}

/// Errors from text extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The parser rejected the document.
    #[error("failed to parse document: {0}")]
    Parse(String),

    /// The blocking extraction task panicked or was cancelled.
    #[error("extraction task failed: {0}")]
    Join(String),
}

/// Turns a document into per-page text fragments, in page order.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_pages(&self, document: UploadedDocument) -> Result<Vec<String>, ExtractError>;
}

/// Join page fragments into a single string.
pub fn join_pages(pages: &[String]) -> String {
    pages.join(PAGE_SEPARATOR)
}

/// Run `parse` on the blocking pool. A panic inside it becomes [`ExtractError::Join`].
pub(crate) async fn parse_blocking<F>(parse: F) -> Result<Vec<String>, ExtractError>
where
    F: FnOnce() -> Result<Vec<String>, ExtractError> + Send + 'static,
{
    tokio::task::spawn_blocking(parse)
        .await
        .map_err(|e| ExtractError::Join(e.to_string()))?
}

/// `pdf-extract` backed extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract_pages(&self, document: UploadedDocument) -> Result<Vec<String>, ExtractError> {
        // The parser is CPU bound and can panic on malformed input.
        parse_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&document.bytes)
                .map_err(|e| ExtractError::Parse(e.to_string()))
        })
        .await
    }
}
