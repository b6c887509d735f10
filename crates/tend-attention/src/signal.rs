//! The one-line explanation shown on a client card.
//!
//! Rules are tried top to bottom and the first match wins, even when a
//! later rule would carry a higher severity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tend_core::clock::ReviewClock;
use tend_core::models::client::ClientSnapshot;

use crate::score::link::SILENCE_DAYS;
use crate::trend::{DeviceStats, Trend, WeeklyStats};

pub const LOW_SLEEP_HOURS: f64 = 6.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SignalCategory {
    Presence,
    Adherence,
    Emotional,
    Energy,
    Sleep,
    Recovery,
    Progress,
    Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Urgent,
    Attention,
    Info,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Signal {
    pub category: SignalCategory,
    pub severity: Severity,
    pub message: String,
    pub icon: String,
}

/// What the rules look at for one client.
pub struct SignalInput<'a> {
    pub snapshot: &'a ClientSnapshot,
    pub clock: &'a ReviewClock,
    pub weekly: &'a WeeklyStats,
    pub device: Option<&'a DeviceStats>,
}

struct SignalRule {
    category: SignalCategory,
    severity: Severity,
    icon: &'static str,
    /// Rendered message when the rule matches.
    detect: fn(&SignalInput<'_>) -> Option<String>,
}

const RULES: &[SignalRule] = &[
    SignalRule {
        category: SignalCategory::Presence,
        severity: Severity::Urgent,
        icon: "message-circle",
        detect: unread_messages,
    },
    SignalRule {
        category: SignalCategory::Presence,
        severity: Severity::Urgent,
        icon: "clock",
        detect: journal_silence,
    },
    SignalRule {
        category: SignalCategory::Adherence,
        severity: Severity::Attention,
        icon: "trending-down",
        detect: adherence_falling,
    },
    SignalRule {
        category: SignalCategory::Emotional,
        severity: Severity::Attention,
        icon: "cloud-rain",
        detect: mood_falling,
    },
    SignalRule {
        category: SignalCategory::Energy,
        severity: Severity::Attention,
        icon: "battery-low",
        detect: energy_falling,
    },
    SignalRule {
        category: SignalCategory::Sleep,
        severity: Severity::Attention,
        icon: "moon",
        detect: short_sleep,
    },
    SignalRule {
        category: SignalCategory::Recovery,
        severity: Severity::Info,
        icon: "heart-pulse",
        detect: hrv_falling,
    },
    SignalRule {
        category: SignalCategory::Progress,
        severity: Severity::Positive,
        icon: "trending-up",
        detect: adherence_rising,
    },
    SignalRule {
        category: SignalCategory::Balance,
        severity: Severity::Positive,
        icon: "scale",
        detect: adherence_steady,
    },
];

/// First matching rule, if any.
pub fn resolve_signal(input: &SignalInput<'_>) -> Option<Signal> {
    RULES.iter().find_map(|rule| {
        (rule.detect)(input).map(|message| Signal {
            category: rule.category,
            severity: rule.severity,
            message,
            icon: rule.icon.to_string(),
        })
    })
}

fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

fn name<'a>(input: &SignalInput<'a>) -> &'a str {
    &input.snapshot.first_name
}

fn unread_messages(input: &SignalInput<'_>) -> Option<String> {
    match input.snapshot.unread_client_messages() {
        0 => None,
        1 => Some(format!("{} sent you a message you haven't read yet", name(input))),
        n => Some(format!("{} sent you {n} messages you haven't read yet", name(input))),
    }
}

/// Same rule as the score: only active clients can go silent.
fn journal_silence(input: &SignalInput<'_>) -> Option<String> {
    if !input.snapshot.is_active {
        return None;
    }
    let last = input.snapshot.last_journal_date()?;
    let days = input.clock.days_since(last);
    (days >= SILENCE_DAYS).then(|| format!("{} hasn't journaled in {days} days", name(input)))
}

fn adherence_falling(input: &SignalInput<'_>) -> Option<String> {
    let average = input.weekly.average_adherence?;
    (input.weekly.adherence_trend == Trend::Down && average < 0.5).then(|| {
        format!(
            "{}'s adherence dropped to {} this week",
            name(input),
            percent(average)
        )
    })
}

fn mood_falling(input: &SignalInput<'_>) -> Option<String> {
    (input.weekly.mood_trend == Trend::Down)
        .then(|| format!("{}'s mood has been lower than last week", name(input)))
}

fn energy_falling(input: &SignalInput<'_>) -> Option<String> {
    (input.weekly.energy_trend == Trend::Down)
        .then(|| format!("{}'s energy has been dipping this week", name(input)))
}

fn short_sleep(input: &SignalInput<'_>) -> Option<String> {
    let device = input.device?;
    let hours = device.average_sleep_hours?;
    (device.sleep_trend == Trend::Down && hours < LOW_SLEEP_HOURS).then(|| {
        format!(
            "{} is averaging {hours:.1}h of sleep, down from last week",
            name(input)
        )
    })
}

fn hrv_falling(input: &SignalInput<'_>) -> Option<String> {
    let device = input.device?;
    (device.hrv_trend == Trend::Down)
        .then(|| format!("{}'s heart rate variability is trending down", name(input)))
}

fn adherence_rising(input: &SignalInput<'_>) -> Option<String> {
    let average = input.weekly.average_adherence?;
    (input.weekly.adherence_trend == Trend::Up && average > 0.75).then(|| {
        format!(
            "{} is making great progress: {} adherence this week",
            name(input),
            percent(average)
        )
    })
}

fn adherence_steady(input: &SignalInput<'_>) -> Option<String> {
    let average = input.weekly.average_adherence?;
    (input.weekly.adherence_trend == Trend::Stable && average > 0.7).then(|| {
        format!(
            "{} is keeping a steady rhythm at {} adherence",
            name(input),
            percent(average)
        )
    })
}
