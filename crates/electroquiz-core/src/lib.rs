//! ElectroQuiz Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - HTTP servers or clients
//! - Runtime specifics
//!
//! Everything here is shared between the server and the chat client.

pub mod chat;
pub mod error;
pub mod ids;
pub mod manifest;
pub mod status;
pub mod topics;

// Re-export commonly used types
pub use chat::{ChatMessage, ChatRequest, ChatResponse, ChatRole, ErrorBody, Message};
pub use error::CoreError;
pub use ids::{MessageId, SessionId};
pub use manifest::AppManifest;
pub use status::ChatStatus;
pub use topics::{TopicCatalog, TopicCategory};
