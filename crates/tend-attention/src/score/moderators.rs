//! Damping applied, in order, after the weighted sum.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ScoreContext;
use crate::trend::{Window, adherence_ratio, average, entry_energy, entry_mood};

pub const NEW_CLIENT_DAYS: i32 = 14;
pub const STABLE_PATTERN_TOLERANCE: f64 = 0.10;
/// Fewer adherence points than this over 14 days is not a pattern.
pub const STABLE_PATTERN_MIN_ENTRIES: usize = 7;
pub const RECENT_CONSULTATION_DAYS: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Effect {
    Halve,
    Subtract(f64),
}

impl Effect {
    pub fn apply(self, score: f64) -> f64 {
        match self {
            Self::Halve => score / 2.0,
            Self::Subtract(points) => score - points,
        }
    }
}

pub struct Moderator {
    pub id: &'static str,
    pub applies: fn(&ScoreContext<'_>) -> bool,
    pub effect: Effect,
}

pub const MODERATORS: &[Moderator] = &[
    Moderator {
        id: "new_client",
        applies: new_client,
        effect: Effect::Halve,
    },
    Moderator {
        id: "stable_pattern",
        applies: stable_pattern,
        effect: Effect::Subtract(20.0),
    },
    Moderator {
        id: "improving_week",
        applies: improving_week,
        effect: Effect::Subtract(15.0),
    },
    Moderator {
        id: "journaled_yesterday",
        applies: journaled_yesterday,
        effect: Effect::Subtract(5.0),
    },
    Moderator {
        id: "recent_consultation",
        applies: recent_consultation,
        effect: Effect::Subtract(10.0),
    },
];

fn new_client(ctx: &ScoreContext<'_>) -> bool {
    ctx.clock.days_since_instant(ctx.snapshot.created_at) < NEW_CLIENT_DAYS
}

/// Every adherence value of the last 14 days sits within ±10% of their
/// own mean. A zero mean is inactivity, not stability.
fn stable_pattern(ctx: &ScoreContext<'_>) -> bool {
    let values: Vec<f64> = [Window::Current, Window::Previous]
        .into_iter()
        .flat_map(|w| ctx.journal.get(w).iter().filter_map(|e| adherence_ratio(e)))
        .collect();
    if values.len() < STABLE_PATTERN_MIN_ENTRIES {
        return false;
    }
    let Some(mean) = average(values.iter().copied()) else {
        return false;
    };
    mean > 0.0
        && values
            .iter()
            .all(|v| (v - mean).abs() <= mean * STABLE_PATTERN_TOLERANCE)
}

/// Any one of adherence, mood or energy averaging higher than last week.
fn improving_week(ctx: &ScoreContext<'_>) -> bool {
    [
        ctx.journal.compare(adherence_ratio),
        ctx.journal.compare(entry_mood),
        ctx.journal.compare(entry_energy),
    ]
    .into_iter()
    .any(|pair| matches!(pair, (Some(now), Some(before)) if now > before))
}

fn journaled_yesterday(ctx: &ScoreContext<'_>) -> bool {
    ctx.snapshot
        .journal_entries
        .iter()
        .any(|e| ctx.clock.days_since(e.date) == 1)
}

fn recent_consultation(ctx: &ScoreContext<'_>) -> bool {
    ctx.snapshot
        .schedule
        .last_consultation_at
        .is_some_and(|at| (0..RECENT_CONSULTATION_DAYS).contains(&ctx.clock.days_since_instant(at)))
}
