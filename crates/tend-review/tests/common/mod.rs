#![allow(dead_code)]

use std::sync::Mutex;

use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

use tend_attention::caseload::{ClientSummary, summarize_client};
use tend_attention::level::AttentionLevel;
use tend_core::clock::ReviewClock;
use tend_core::models::client::{ClientSnapshot, SnoozeState};
use tend_core::models::command::ClientCommand;
use tend_core::models::schedule::Schedule;
use tend_review::error::ReviewError;
use tend_review::executor::{ActionExecutor, BoxFuture};

pub fn now() -> Timestamp {
    "2026-03-10T09:00:00Z".parse().unwrap()
}

pub fn minutes_later(minutes: i64) -> Timestamp {
    now().checked_add(SignedDuration::from_mins(minutes)).unwrap()
}

/// A summary for `first_name` pinned at `score`.
pub fn summary(first_name: &str, score: u8) -> ClientSummary {
    let snapshot = ClientSnapshot {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: "Test".to_string(),
        is_premium: false,
        created_at: "2025-11-01T09:00:00Z".parse().unwrap(),
        is_active: true,
        is_deleted: false,
        snooze: SnoozeState::default(),
        journal_entries: Vec::new(),
        device_summaries: Vec::new(),
        device_insights: Vec::new(),
        messages: Vec::new(),
        care_plans: Vec::new(),
        schedule: Schedule::default(),
    };
    let clock = ReviewClock::at(now(), TimeZone::UTC);
    let mut summary = summarize_client(&snapshot, &clock);
    summary.score = score;
    summary.level = AttentionLevel::from_score(score);
    summary
}

pub fn names(summaries: &[ClientSummary]) -> Vec<&str> {
    summaries.iter().map(|s| s.client.first_name.as_str()).collect()
}

/// Accepts every command and remembers it.
#[derive(Default)]
pub struct RecordingExecutor {
    pub executed: Mutex<Vec<ClientCommand>>,
}

impl ActionExecutor for RecordingExecutor {
    fn execute<'a>(&'a self, command: &'a ClientCommand) -> BoxFuture<'a, Result<(), ReviewError>> {
        Box::pin(async move {
            self.executed.lock().unwrap().push(command.clone());
            Ok(())
        })
    }
}

/// Rejects every command.
pub struct FailingExecutor;

impl ActionExecutor for FailingExecutor {
    fn execute<'a>(
        &'a self,
        _command: &'a ClientCommand,
    ) -> BoxFuture<'a, Result<(), ReviewError>> {
        Box::pin(async { Err(ReviewError::ActionFailed("mail relay unavailable".into())) })
    }
}
