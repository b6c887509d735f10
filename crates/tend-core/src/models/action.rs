use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Everything a practitioner can do for a client from the review.
///
/// `Snooze` is never suggested by the engine; it is offered by the guided
/// review alongside the suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActionType {
    SendMessage,
    LogObservation,
    AdjustPlan,
    ScheduleCall,
    OpenRecord,
    Snooze,
}
