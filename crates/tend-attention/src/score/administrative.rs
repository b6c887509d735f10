//! Paperwork and calendar (×1).

use tend_core::models::care_plan::CarePlanStatus;

use super::{Condition, ScoreContext};

pub const DRAFT_STALE_DAYS: i32 = 7;
pub const UPCOMING_HOURS: f64 = 48.0;
pub const NOTE_GRACE_DAYS: i32 = 3;

pub const CONDITIONS: &[Condition] = &[
    Condition {
        id: "stale_draft_plan",
        base_points: 10.0,
        matches: stale_draft_plan,
    },
    Condition {
        id: "consultation_today",
        base_points: 8.0,
        matches: consultation_today,
    },
    Condition {
        id: "consultation_soon",
        base_points: 5.0,
        matches: consultation_soon,
    },
    Condition {
        id: "missing_session_note",
        base_points: 8.0,
        matches: missing_session_note,
    },
];

fn stale_draft_plan(ctx: &ScoreContext<'_>) -> usize {
    usize::from(ctx.snapshot.care_plans.iter().any(|plan| {
        plan.status == CarePlanStatus::Draft
            && ctx.clock.days_since_instant(plan.updated_at) > DRAFT_STALE_DAYS
    }))
}

fn is_today(ctx: &ScoreContext<'_>) -> bool {
    ctx.snapshot
        .schedule
        .next_appointment_at
        .is_some_and(|at| ctx.clock.date_of(at) == ctx.clock.today())
}

fn consultation_today(ctx: &ScoreContext<'_>) -> usize {
    usize::from(is_today(ctx))
}

/// Within the next 48 hours but not today; today takes precedence.
fn consultation_soon(ctx: &ScoreContext<'_>) -> usize {
    if is_today(ctx) {
        return 0;
    }
    usize::from(ctx.snapshot.schedule.next_appointment_at.is_some_and(|at| {
        let hours_until = -ctx.clock.hours_since(at);
        hours_until > 0.0 && hours_until <= UPCOMING_HOURS
    }))
}

/// A consultation in the last 3 days with no session note written since.
fn missing_session_note(ctx: &ScoreContext<'_>) -> usize {
    let schedule = &ctx.snapshot.schedule;
    let Some(consulted_at) = schedule.last_consultation_at else {
        return 0;
    };
    if consulted_at > ctx.clock.now()
        || ctx.clock.days_since_instant(consulted_at) > NOTE_GRACE_DAYS
    {
        return 0;
    }
    let noted = schedule
        .last_session_note_at
        .is_some_and(|note| note >= consulted_at);
    usize::from(!noted)
}
