//! HTTP request handlers.

mod catalog;
mod chat;
mod health;
mod pdf;

pub use catalog::{list_topics, manifest};
pub use chat::chat;
pub use health::health_check;
pub use pdf::extract_pdf;
