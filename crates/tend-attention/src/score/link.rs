//! Disengagement from the practitioner relationship (×3).

use tend_core::models::message::SenderRole;

use super::{Condition, ScoreContext};

/// Journal silence after which a client counts as gone quiet.
pub const SILENCE_DAYS: i32 = 7;
pub const CONSULTATION_STALE_DAYS: i32 = 45;
pub const UNANSWERED_OUTREACH_DAYS: i32 = 5;
/// Cooling off: no entry in the last 3 days, but at least one in the 3 to
/// 10 days before today.
pub const COOLING_QUIET_DAYS: i32 = 3;
pub const COOLING_LOOKBACK_DAYS: i32 = 10;

pub const CONDITIONS: &[Condition] = &[
    Condition {
        id: "unread_client_message",
        base_points: 30.0,
        matches: unread_client_message,
    },
    Condition {
        id: "journal_silence",
        base_points: 25.0,
        matches: journal_silence,
    },
    Condition {
        id: "consultation_overdue",
        base_points: 20.0,
        matches: consultation_overdue,
    },
    Condition {
        id: "cooling_off",
        base_points: 15.0,
        matches: cooling_off,
    },
    Condition {
        id: "unanswered_outreach",
        base_points: 15.0,
        matches: unanswered_outreach,
    },
];

fn unread_client_message(ctx: &ScoreContext<'_>) -> usize {
    usize::from(ctx.snapshot.unread_client_messages() > 0)
}

/// Only clients who have journaled can go silent; an empty journal is
/// no signal at all.
fn journal_silence(ctx: &ScoreContext<'_>) -> usize {
    usize::from(
        ctx.snapshot.is_active && ctx.days_since_journal.is_some_and(|d| d >= SILENCE_DAYS),
    )
}

fn consultation_overdue(ctx: &ScoreContext<'_>) -> usize {
    usize::from(
        ctx.snapshot
            .schedule
            .last_consultation_at
            .is_some_and(|at| ctx.clock.days_since_instant(at) > CONSULTATION_STALE_DAYS),
    )
}

/// Journaled 3 to 10 days ago and not since. Independent of
/// `journal_silence`: a last entry 7 to 10 days ago fires both.
fn cooling_off(ctx: &ScoreContext<'_>) -> usize {
    let mut earlier = false;
    for entry in &ctx.snapshot.journal_entries {
        let age = ctx.clock.days_since(entry.date);
        if (0..COOLING_QUIET_DAYS).contains(&age) {
            return 0;
        }
        if (COOLING_QUIET_DAYS..=COOLING_LOOKBACK_DAYS).contains(&age) {
            earlier = true;
        }
    }
    usize::from(earlier)
}

/// The practitioner wrote last and the client has not replied for days.
fn unanswered_outreach(ctx: &ScoreContext<'_>) -> usize {
    let messages = &ctx.snapshot.messages;
    let Some(last_outbound) = messages
        .iter()
        .filter(|m| m.sender == SenderRole::Practitioner)
        .map(|m| m.sent_at)
        .max()
    else {
        return 0;
    };

    let answered = messages
        .iter()
        .any(|m| m.sender == SenderRole::Client && m.sent_at > last_outbound);

    usize::from(
        !answered && ctx.clock.days_since_instant(last_outbound) >= UNANSWERED_OUTREACH_DAYS,
    )
}
