use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Scheduling facts for one client. Every field is optional; a client who
/// never had a consultation simply has `last_consultation_at: None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Schedule {
    #[serde(default)]
    pub last_consultation_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub next_appointment_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub last_session_note_at: Option<jiff::Timestamp>,
}
