//! Outbound commands the caller executes when a practitioner acts on a
//! suggestion. The engine only builds them; delivery belongs to whoever
//! implements the executor.

use jiff::ToSpan;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::action::ActionType;
use super::client::SnoozeReason;
use crate::clock::ReviewClock;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ClientCommand {
    SendMessage {
        client_id: Uuid,
        body: String,
    },
    SaveObservation {
        client_id: Uuid,
        text: String,
    },
    Snooze {
        client_id: Uuid,
        reason: SnoozeReason,
        until: jiff::Timestamp,
    },
    AdjustPlan {
        client_id: Uuid,
    },
    ScheduleCall {
        client_id: Uuid,
    },
    OpenRecord {
        client_id: Uuid,
    },
}

impl ClientCommand {
    pub fn client_id(&self) -> Uuid {
        match self {
            Self::SendMessage { client_id, .. }
            | Self::SaveObservation { client_id, .. }
            | Self::Snooze { client_id, .. }
            | Self::AdjustPlan { client_id }
            | Self::ScheduleCall { client_id }
            | Self::OpenRecord { client_id } => *client_id,
        }
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            Self::SendMessage { .. } => ActionType::SendMessage,
            Self::SaveObservation { .. } => ActionType::LogObservation,
            Self::Snooze { .. } => ActionType::Snooze,
            Self::AdjustPlan { .. } => ActionType::AdjustPlan,
            Self::ScheduleCall { .. } => ActionType::ScheduleCall,
            Self::OpenRecord { .. } => ActionType::OpenRecord,
        }
    }
}

/// Snooze lengths offered in the review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SnoozeDuration {
    ThreeDays,
    OneWeek,
    TwoWeeks,
    OneMonth,
}

impl SnoozeDuration {
    /// Resume instant, counted in calendar units from the clock's zoned now.
    pub fn resume_at(self, clock: &ReviewClock) -> Result<jiff::Timestamp, CoreError> {
        let span = match self {
            Self::ThreeDays => 3.days(),
            Self::OneWeek => 1.week(),
            Self::TwoWeeks => 2.weeks(),
            Self::OneMonth => 1.month(),
        };
        Ok(clock.zoned().checked_add(span)?.timestamp())
    }

    pub fn snooze(
        self,
        client_id: Uuid,
        reason: SnoozeReason,
        clock: &ReviewClock,
    ) -> Result<ClientCommand, CoreError> {
        Ok(ClientCommand::Snooze {
            client_id,
            reason,
            until: self.resume_at(clock)?,
        })
    }
}
