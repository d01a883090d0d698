//! ElectroQuiz Server Library
//!
//! HTTP surface for the ElectroQuiz learning platform: a chat proxy to a
//! hosted chat completion API and a PDF text extraction endpoint.

pub mod config;
pub mod document;
pub mod http;
pub mod state;
pub mod upstream;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Config, UpstreamConfig};
pub use document::{PdfExtractor, TextExtractor, UploadedDocument};
pub use state::AppState;
pub use upstream::{ChatCompletion, GroqClient};
