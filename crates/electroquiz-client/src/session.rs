//! Conversation state for one chat session.
//!
//! A session owns an append-only list of [`Message`]s, seeded with a welcome
//! message, plus the input buffer and the [`ChatStatus`] of its single
//! outstanding request.
//!
//! Submitting hands out a [`PendingTurn`] token; the session only returns to
//! [`ChatStatus::Idle`] when that token is given back through
//! [`ChatSession::complete`]. Callers that need to keep rendering while a
//! request is in flight drive `begin`/`complete` themselves; everyone else
//! uses [`ChatSession::submit`].

use async_trait::async_trait;
use tracing::{debug, warn};

use electroquiz_core::{
    topics, ChatRequest, ChatResponse, ChatRole, ChatStatus, CoreError, Message, MessageId,
    SessionId,
};

use crate::error::ClientError;
use crate::http::HttpClient;

pub const WELCOME_MESSAGE_ID: &str = "welcome-message";

pub const WELCOME_MESSAGE: &str = concat!(
    "Hello! I'm your Electronics Engineering AI assistant powered by Groq. ",
    "I can help you with questions about circuit theory, digital electronics, ",
    "analog electronics, microprocessors, and other electronics topics. ",
    "How can I assist you today?",
);

/// Shown in place of the assistant's reply when a request fails.
pub const APOLOGY_MESSAGE: &str =
    "I'm sorry, I encountered an error while processing your request. Please try again later.";

/// Anything that can carry a chat request to the server.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError>;
}

#[async_trait]
impl ChatTransport for HttpClient {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        self.chat(request).await
    }
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Input was empty or whitespace only.
    EmptyInput,
    /// A request is already in flight.
    Busy,
}

/// Result of [`ChatSession::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was appended and no request was made.
    Rejected(RejectReason),
    /// The assistant's reply was appended.
    Replied,
    /// The request failed; the apology message was appended.
    Failed,
}

/// Token for the single in-flight request of a session.
///
/// Only the session that issued it accepts it back.
#[derive(Debug)]
#[must_use = "a pending turn must be completed or the session stays busy"]
pub struct PendingTurn {
    session: SessionId,
    turn: u64,
    request: ChatRequest,
}

impl PendingTurn {
    /// The request to send: full history including the new user message.
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// Conversation state of one chat session.
#[derive(Debug)]
pub struct ChatSession {
    id: SessionId,
    messages: Vec<Message>,
    input: String,
    status: ChatStatus,
    turn: u64,
    revision: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Create a session seeded with the welcome message.
    pub fn new() -> Self {
        Self {
            id: SessionId::generate(),
            messages: vec![Message::with_id(
                MessageId::new(WELCOME_MESSAGE_ID),
                ChatRole::Assistant,
                WELCOME_MESSAGE,
            )],
            input: String::new(),
            status: ChatStatus::Idle,
            turn: 0,
            revision: 0,
        }
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> ChatStatus {
        self.status
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == ChatStatus::Waiting
    }

    /// Bumped on every append. Views scroll to the newest message when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the input buffer.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Fill the input with the canned question for `topic`.
    pub fn prefill_topic(&mut self, topic: &str) {
        self.input = topics::topic_prompt(topic);
    }

    /// Accept the current input as a new user turn.
    ///
    /// Appends the user message, clears the input and enters `Waiting`.
    pub fn begin(&mut self) -> Result<PendingTurn, RejectReason> {
        if self.input.trim().is_empty() {
            return Err(RejectReason::EmptyInput);
        }
        if !self.status.can_submit() {
            return Err(RejectReason::Busy);
        }

        let content = std::mem::take(&mut self.input);
        self.push(Message::user(content));
        self.status = ChatStatus::Waiting;
        self.turn += 1;

        debug!(session = %self.id, turn = self.turn, "Chat turn started");

        Ok(PendingTurn {
            session: self.id,
            turn: self.turn,
            request: ChatRequest::from_history(&self.messages),
        })
    }

    /// Record the outcome of `pending` and return to `Idle`.
    ///
    /// Fails if `pending` was issued by another session or for an earlier turn.
    pub fn complete(
        &mut self,
        pending: PendingTurn,
        result: Result<ChatResponse, ClientError>,
    ) -> Result<SubmitOutcome, CoreError> {
        if pending.session != self.id || pending.turn != self.turn {
            return Err(CoreError::InvalidStateTransition {
                from: format!("session {} turn {}", pending.session, pending.turn),
                to: format!("session {} turn {}", self.id, self.turn),
            });
        }
        self.status = self.status.transition(ChatStatus::Idle)?;

        let outcome = match result {
            Ok(response) => {
                self.push(Message::assistant(response.content));
                SubmitOutcome::Replied
            }
            Err(e) => {
                warn!(error = %e, "Error generating response");
                self.push(Message::assistant(APOLOGY_MESSAGE));
                SubmitOutcome::Failed
            }
        };
        Ok(outcome)
    }

    /// Submit the current input and wait for the reply.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: ChatTransport + ?Sized,
    {
        let pending = match self.begin() {
            Ok(pending) => pending,
            Err(reason) => return SubmitOutcome::Rejected(reason),
        };

        let result = transport.send_chat(pending.request()).await;
        match self.complete(pending, result) {
            Ok(outcome) => outcome,
            Err(e) => {
                // Unreachable: the token was minted by this session just above.
                warn!(error = %e, "Chat turn completed out of order");
                SubmitOutcome::Failed
            }
        }
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.revision += 1;
    }
}
