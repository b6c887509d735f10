use thiserror::Error;
use uuid::Uuid;

use tend_core::models::action::ActionType;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("review session is already completed")]
    SessionCompleted,

    #[error("command targets client {command} but the review is on client {current}")]
    ClientMismatch { current: Uuid, command: Uuid },

    #[error("action failed: {0}")]
    ActionFailed(String),
}

impl ReviewError {
    /// Prepend the action and client to a failure message.
    pub fn with_action(self, action_type: ActionType, client_id: Uuid) -> Self {
        match self {
            Self::ActionFailed(msg) => {
                Self::ActionFailed(format!("{action_type:?} for client {client_id}: {msg}"))
            }
            other => other,
        }
    }
}
