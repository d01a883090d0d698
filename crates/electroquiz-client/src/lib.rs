//! Chat client library for ElectroQuiz.
//!
//! Provides an HTTP client for the ElectroQuiz server and the conversation
//! state of a chat session.

pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpClient, TopicList};
pub use session::{ChatSession, ChatTransport, PendingTurn, RejectReason, SubmitOutcome};
