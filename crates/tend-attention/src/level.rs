use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tend_core::models::client::ClientSnapshot;

pub const URGENT_THRESHOLD: u8 = 85;
pub const ATTENTION_THRESHOLD: u8 = 60;
pub const PROGRESS_THRESHOLD: u8 = 40;

/// Attention tier shown on the client card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AttentionLevel {
    Urgent,
    Attention,
    Progress,
    Stable,
    /// Never journaled and never consulted: the score says nothing yet.
    Insufficient,
}

impl AttentionLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= URGENT_THRESHOLD => Self::Urgent,
            s if s >= ATTENTION_THRESHOLD => Self::Attention,
            s if s >= PROGRESS_THRESHOLD => Self::Progress,
            _ => Self::Stable,
        }
    }

    /// Tier for `snapshot`, with the insufficient-data override.
    pub fn classify(snapshot: &ClientSnapshot, score: u8) -> Self {
        if !snapshot.has_engagement_history() {
            Self::Insufficient
        } else {
            Self::from_score(score)
        }
    }
}
