//! Wearable-derived strain (×1.5), premium clients with device data only.

use std::collections::BTreeSet;

use tend_core::models::device::{DeviceSummary, InsightSeverity};

use super::{Condition, ScoreContext};
use crate::trend::{Window, recent_insights, relative_drop};

pub const SHORT_NIGHT_HOURS: f64 = 6.0;

pub const CONDITIONS: &[Condition] = &[
    Condition {
        id: "short_nights",
        base_points: 15.0,
        matches: short_nights,
    },
    Condition {
        id: "sleep_score_drop",
        base_points: 12.0,
        matches: sleep_score_drop,
    },
    Condition {
        id: "hrv_drop",
        base_points: 12.0,
        matches: hrv_drop,
    },
    Condition {
        id: "activity_drop",
        base_points: 10.0,
        matches: activity_drop,
    },
    Condition {
        id: "attention_insight",
        base_points: 10.0,
        matches: attention_insights,
    },
    Condition {
        id: "info_insight",
        base_points: 5.0,
        matches: info_insights,
    },
];

pub fn applies(ctx: &ScoreContext<'_>) -> bool {
    ctx.snapshot.has_device_data()
}

fn short_nights(ctx: &ScoreContext<'_>) -> usize {
    let nights: BTreeSet<_> = ctx
        .devices
        .get(Window::Current)
        .iter()
        .filter(|d| d.sleep_hours.is_some_and(|h| h < SHORT_NIGHT_HOURS))
        .map(|d| d.date)
        .collect();
    usize::from(nights.len() >= 5)
}

fn dropped_by(
    ctx: &ScoreContext<'_>,
    metric: fn(&DeviceSummary) -> Option<f64>,
    at_least: f64,
) -> usize {
    let (now, before) = ctx.devices.compare(metric);
    usize::from(relative_drop(now, before).is_some_and(|drop| drop >= at_least))
}

fn sleep_score_drop(ctx: &ScoreContext<'_>) -> usize {
    dropped_by(ctx, |d| d.sleep_score, 0.20)
}

fn hrv_drop(ctx: &ScoreContext<'_>) -> usize {
    dropped_by(ctx, |d| d.hrv_average, 0.15)
}

fn activity_drop(ctx: &ScoreContext<'_>) -> usize {
    dropped_by(ctx, |d| d.activity_level, 0.30)
}

fn insights_at(ctx: &ScoreContext<'_>, severity: InsightSeverity) -> usize {
    recent_insights(ctx.snapshot, ctx.clock)
        .filter(|i| i.severity == severity)
        .count()
}

fn attention_insights(ctx: &ScoreContext<'_>) -> usize {
    insights_at(ctx, InsightSeverity::Attention)
}

fn info_insights(ctx: &ScoreContext<'_>) -> usize {
    insights_at(ctx, InsightSeverity::Info)
}
