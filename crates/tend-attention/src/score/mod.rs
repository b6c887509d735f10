//! Attention score: a bounded 0–100 priority per client.
//!
//! The score is additive. Each category owns a table of conditions with
//! base points; points of fired conditions are multiplied by the category
//! weight and summed. An ordered list of moderators then damps the sum,
//! an active snooze forces zero, and the result is clamped and rounded.

pub mod administrative;
pub mod adherence;
pub mod link;
pub mod moderators;
pub mod physiological;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tend_core::clock::ReviewClock;
use tend_core::models::client::ClientSnapshot;

use crate::trend::{DeviceWeeks, JournalWeeks, device_weeks, journal_weeks};
use moderators::{Effect, MODERATORS};

pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreCategory {
    /// Disengagement from the practitioner relationship.
    Link,
    Adherence,
    /// Wearable-derived strain. Premium clients with device data only.
    Physiological,
    Administrative,
}

impl ScoreCategory {
    pub fn weight(self) -> f64 {
        match self {
            Self::Link => 3.0,
            Self::Adherence => 2.0,
            Self::Physiological => 1.5,
            Self::Administrative => 1.0,
        }
    }
}

/// One scoring condition. `matches` returns how many times it fired:
/// 0 or 1 for yes/no conditions, a count for per-item ones.
pub struct Condition {
    pub id: &'static str,
    pub base_points: f64,
    pub matches: fn(&ScoreContext<'_>) -> usize,
}

pub struct CategoryRules {
    pub category: ScoreCategory,
    /// Whether the category is evaluated at all for this client.
    pub applies: fn(&ScoreContext<'_>) -> bool,
    pub conditions: &'static [Condition],
}

fn always(_: &ScoreContext<'_>) -> bool {
    true
}

/// Every category, in priority order.
pub static CATEGORIES: &[CategoryRules] = &[
    CategoryRules {
        category: ScoreCategory::Link,
        applies: always,
        conditions: link::CONDITIONS,
    },
    CategoryRules {
        category: ScoreCategory::Adherence,
        applies: always,
        conditions: adherence::CONDITIONS,
    },
    CategoryRules {
        category: ScoreCategory::Physiological,
        applies: physiological::applies,
        conditions: physiological::CONDITIONS,
    },
    CategoryRules {
        category: ScoreCategory::Administrative,
        applies: always,
        conditions: administrative::CONDITIONS,
    },
];

/// Per-client inputs shared by every condition, built once per score.
pub struct ScoreContext<'a> {
    pub snapshot: &'a ClientSnapshot,
    pub clock: &'a ReviewClock,
    pub journal: JournalWeeks<'a>,
    pub devices: DeviceWeeks<'a>,
    /// Calendar days since the latest journal entry; `None` if never.
    pub days_since_journal: Option<i32>,
}

impl<'a> ScoreContext<'a> {
    pub fn new(snapshot: &'a ClientSnapshot, clock: &'a ReviewClock) -> Self {
        Self {
            snapshot,
            clock,
            journal: journal_weeks(snapshot, clock),
            devices: device_weeks(snapshot, clock),
            days_since_journal: snapshot.last_journal_date().map(|d| clock.days_since(d)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FiredCondition {
    pub id: String,
    pub category: ScoreCategory,
    pub base_points: f64,
    pub matches: u32,
    pub weighted_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryTotal {
    pub category: ScoreCategory,
    pub weight: f64,
    pub weighted_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedModerator {
    pub id: String,
    pub effect: Effect,
    pub score_after: f64,
}

/// How a score was reached, condition by condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub fired: Vec<FiredCondition>,
    pub category_totals: Vec<CategoryTotal>,
    pub weighted_sum: f64,
    pub moderators: Vec<AppliedModerator>,
    /// An active snooze overrode everything above.
    pub snoozed: bool,
    /// Value before clamping.
    pub raw: f64,
    pub score: u8,
}

/// Score one client and keep the full audit trail.
pub fn score_client(snapshot: &ClientSnapshot, clock: &ReviewClock) -> ScoreBreakdown {
    let ctx = ScoreContext::new(snapshot, clock);

    let mut fired = Vec::new();
    let mut category_totals = Vec::with_capacity(CATEGORIES.len());
    for rules in CATEGORIES {
        if !(rules.applies)(&ctx) {
            continue;
        }
        let weight = rules.category.weight();
        let mut subtotal = 0.0;
        for condition in rules.conditions {
            let matches = (condition.matches)(&ctx);
            if matches == 0 {
                continue;
            }
            let weighted_points = condition.base_points * matches as f64 * weight;
            subtotal += weighted_points;
            fired.push(FiredCondition {
                id: condition.id.to_string(),
                category: rules.category,
                base_points: condition.base_points,
                matches: matches as u32,
                weighted_points,
            });
        }
        category_totals.push(CategoryTotal {
            category: rules.category,
            weight,
            weighted_points: subtotal,
        });
    }

    let weighted_sum: f64 = category_totals.iter().map(|t| t.weighted_points).sum();

    let mut raw = weighted_sum;
    let mut applied = Vec::new();
    for moderator in MODERATORS {
        if (moderator.applies)(&ctx) {
            raw = moderator.effect.apply(raw);
            applied.push(AppliedModerator {
                id: moderator.id.to_string(),
                effect: moderator.effect,
                score_after: raw,
            });
        }
    }

    let snoozed = snapshot.is_snoozed_at(clock.now());
    if snoozed {
        raw = 0.0;
    }

    ScoreBreakdown {
        fired,
        category_totals,
        weighted_sum,
        moderators: applied,
        snoozed,
        raw,
        score: raw.clamp(0.0, MAX_SCORE).round() as u8,
    }
}

/// The bare 0–100 score.
pub fn attention_score(snapshot: &ClientSnapshot, clock: &ReviewClock) -> u8 {
    score_client(snapshot, clock).score
}
