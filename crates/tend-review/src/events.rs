use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use tend_core::models::action::ActionType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewEventKind {
    Started,
    ActionRecorded,
    ActionFailed,
    Completed,
    Closed,
}

impl ReviewEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::ActionRecorded => "action_recorded",
            Self::ActionFailed => "action_failed",
            Self::Completed => "completed",
            Self::Closed => "closed",
        }
    }
}

/// A structured event in the life of a review session.
///
/// Emitted through `tracing`, so whatever subscriber the host installs
/// (JSON logs in the service) picks it up.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewEvent {
    pub kind: ReviewEventKind,
    pub session_id: Uuid,
    pub client_id: Option<Uuid>,
    pub action_type: Option<ActionType>,
    pub details: Option<serde_json::Value>,
}

impl ReviewEvent {
    pub fn new(kind: ReviewEventKind, session_id: Uuid) -> Self {
        Self {
            kind,
            session_id,
            client_id: None,
            action_type: None,
            details: None,
        }
    }

    pub fn for_client(mut self, client_id: Uuid) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn with_action(mut self, action_type: ActionType) -> Self {
        self.action_type = Some(action_type);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self.details.as_ref().map(|d| d.to_string());
        match self.kind {
            ReviewEventKind::ActionFailed => warn!(
                review.kind = self.kind.as_str(),
                review.session_id = %self.session_id,
                review.client_id = ?self.client_id,
                review.action = ?self.action_type,
                review.details = ?details,
                "review event"
            ),
            _ => info!(
                review.kind = self.kind.as_str(),
                review.session_id = %self.session_id,
                review.client_id = ?self.client_id,
                review.action = ?self.action_type,
                review.details = ?details,
                "review event"
            ),
        }
    }
}
