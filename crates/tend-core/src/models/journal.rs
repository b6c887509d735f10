use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A client's daily self-report.
///
/// Mood and energy are carried as the raw labels the journaling form
/// submits; the attention engine maps them to ordinal scores.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JournalEntry {
    pub date: jiff::civil::Date,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub energy: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub adherence: AdherenceFlags,
}

/// The four daily habits a client ticks off in the journal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdherenceFlags {
    #[serde(default)]
    pub hydration: bool,
    #[serde(default)]
    pub movement: bool,
    #[serde(default)]
    pub nutrition: bool,
    #[serde(default)]
    pub rest: bool,
}

impl AdherenceFlags {
    pub const COUNT: usize = 4;

    pub fn completed(&self) -> usize {
        [self.hydration, self.movement, self.nutrition, self.rest]
            .iter()
            .filter(|done| **done)
            .count()
    }

    /// Fraction of habits completed, 0.0–1.0.
    pub fn ratio(&self) -> f64 {
        self.completed() as f64 / Self::COUNT as f64
    }

    pub fn none_set(&self) -> bool {
        self.completed() == 0
    }
}
