//! Client configuration.

use std::time::Duration;

/// Chat client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the ElectroQuiz server.
    pub base_url: String,

    /// Per-request timeout. `None` waits as long as the server takes.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout: None,
        }
    }
}
