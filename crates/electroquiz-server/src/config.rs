//! Server configuration.

/// Default Groq OpenAI-compatible chat completion endpoint.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default upstream model identifier.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Environment variable holding the upstream API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address.
    pub bind_addr: String,

    /// Upstream chat completion settings.
    pub upstream: UpstreamConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            upstream: UpstreamConfig::default(),
        }
    }
}

/// Settings for the hosted chat completion API.
///
/// The API key is deliberately absent: it is looked up in the environment
/// (`api_key_var`) on every request.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Full URL of the chat completions endpoint.
    pub api_url: String,

    /// Model identifier sent with every request.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f64,

    /// Maximum output tokens.
    pub max_tokens: u32,

    /// Name of the environment variable holding the API key.
    pub api_key_var: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            api_key_var: API_KEY_VAR.to_string(),
        }
    }
}
