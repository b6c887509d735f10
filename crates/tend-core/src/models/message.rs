use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One message in the practitioner/client thread.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Message {
    pub sender: SenderRole,
    pub sent_at: jiff::Timestamp,
    /// `None` until the recipient opens it.
    #[serde(default)]
    pub read_at: Option<jiff::Timestamp>,
}

impl Message {
    pub fn is_unread_from_client(&self) -> bool {
        self.sender == SenderRole::Client && self.read_at.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SenderRole {
    Client,
    Practitioner,
}
