//! Struggles with the care plan itself (×2).

use std::collections::BTreeSet;

use tend_core::models::journal::JournalEntry;

use super::{Condition, ScoreContext};
use crate::trend::{LOW_ORDINAL, Window, adherence_ratio, entry_energy, entry_mood};

/// Phrases in journal notes that suggest the client is losing heart.
pub const DISCOURAGEMENT_KEYWORDS: &[&str] = &[
    "discouraged",
    "give up",
    "giving up",
    "gave up",
    "hopeless",
    "overwhelmed",
    "pointless",
    "can't keep up",
    "no motivation",
    "unmotivated",
    "too hard",
    "failing",
];

pub const CONDITIONS: &[Condition] = &[
    Condition {
        id: "adherence_regression",
        base_points: 20.0,
        matches: adherence_regression,
    },
    Condition {
        id: "empty_adherence_days",
        base_points: 15.0,
        matches: empty_adherence_days,
    },
    Condition {
        id: "low_energy_days",
        base_points: 15.0,
        matches: low_energy_days,
    },
    Condition {
        id: "low_mood_days",
        base_points: 15.0,
        matches: low_mood_days,
    },
    Condition {
        id: "discouragement_in_notes",
        base_points: 20.0,
        matches: discouragement_in_notes,
    },
];

/// Distinct days this week with an entry satisfying `pred`.
fn days_this_week(ctx: &ScoreContext<'_>, pred: impl Fn(&JournalEntry) -> bool) -> usize {
    ctx.journal
        .get(Window::Current)
        .iter()
        .filter(|e| pred(e))
        .map(|e| e.date)
        .collect::<BTreeSet<_>>()
        .len()
}

fn adherence_regression(ctx: &ScoreContext<'_>) -> usize {
    let (now, before) = ctx.journal.compare(adherence_ratio);
    usize::from(matches!((now, before), (Some(now), Some(before)) if now < 0.5 && before > 0.7))
}

fn empty_adherence_days(ctx: &ScoreContext<'_>) -> usize {
    usize::from(days_this_week(ctx, |e| e.adherence.none_set()) >= 3)
}

fn low_energy_days(ctx: &ScoreContext<'_>) -> usize {
    usize::from(days_this_week(ctx, |e| entry_energy(e).is_some_and(|s| s <= LOW_ORDINAL)) >= 4)
}

fn low_mood_days(ctx: &ScoreContext<'_>) -> usize {
    usize::from(days_this_week(ctx, |e| entry_mood(e).is_some_and(|s| s <= LOW_ORDINAL)) >= 4)
}

pub fn is_discouraged(notes: &str) -> bool {
    let notes = notes.to_lowercase();
    DISCOURAGEMENT_KEYWORDS.iter().any(|k| notes.contains(k))
}

fn discouragement_in_notes(ctx: &ScoreContext<'_>) -> usize {
    usize::from(
        ctx.journal
            .get(Window::Current)
            .iter()
            .filter_map(|e| e.notes.as_deref())
            .any(is_discouraged),
    )
}
