use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::care_plan::CarePlan;
use super::device::{DeviceInsight, DeviceSummary};
use super::journal::JournalEntry;
use super::message::Message;
use super::schedule::Schedule;

/// Everything the attention engine knows about one client, as handed over
/// by the data layer. Read-only: the engine never mutates a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientSnapshot {
    pub id: Uuid,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_premium: bool,
    pub created_at: jiff::Timestamp,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub snooze: SnoozeState,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(default)]
    pub device_summaries: Vec<DeviceSummary>,
    #[serde(default)]
    pub device_insights: Vec<DeviceInsight>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub care_plans: Vec<CarePlan>,
    #[serde(default)]
    pub schedule: Schedule,
}

fn default_active() -> bool {
    true
}

impl ClientSnapshot {
    pub fn identity(&self) -> ClientIdentity {
        ClientIdentity {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            is_premium: self.is_premium,
        }
    }

    /// Snoozed with a resume instant still ahead of `now`. A snooze flag
    /// without an end, or with an end already passed, has lapsed.
    pub fn is_snoozed_at(&self, now: jiff::Timestamp) -> bool {
        self.snooze.is_snoozed && self.snooze.snooze_until.is_some_and(|until| until > now)
    }

    /// Whether the client ever journaled or met the practitioner.
    pub fn has_engagement_history(&self) -> bool {
        !self.journal_entries.is_empty() || self.schedule.last_consultation_at.is_some()
    }

    pub fn last_journal_date(&self) -> Option<jiff::civil::Date> {
        self.journal_entries.iter().map(|e| e.date).max()
    }

    pub fn unread_client_messages(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.is_unread_from_client())
            .count()
    }

    /// Premium clients with at least one device summary.
    pub fn has_device_data(&self) -> bool {
        self.is_premium && !self.device_summaries.is_empty()
    }
}

/// The identifying slice of a snapshot carried on every summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientIdentity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub is_premium: bool,
}

impl ClientIdentity {
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SnoozeState {
    #[serde(default)]
    pub is_snoozed: bool,
    #[serde(default)]
    pub snooze_until: Option<jiff::Timestamp>,
    #[serde(default)]
    pub snooze_reason: Option<SnoozeReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SnoozeReason {
    Vacation,
    Paused,
    Stable,
    Other,
}
