//! Chat session status.

use crate::error::CoreError;

/// Status of a chat session with respect to its outstanding request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChatStatus {
    /// No request in flight; input accepted.
    #[default]
    Idle,
    /// A request is in flight; further submissions are refused.
    Waiting,
}

impl ChatStatus {
    /// Returns true if a new message may be submitted.
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Move to `to`, rejecting `Idle -> Idle` and `Waiting -> Waiting`.
    pub fn transition(self, to: ChatStatus) -> Result<ChatStatus, CoreError> {
        if self == to {
            return Err(CoreError::InvalidStateTransition {
                from: format!("{:?}", self),
                to: format!("{:?}", to),
            });
        }
        Ok(to)
    }
}
