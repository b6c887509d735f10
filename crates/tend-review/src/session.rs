//! The guided review state machine.
//!
//! A session owns its queue, walks it with `next`/`previous`, and logs
//! every action taken. Leaving the last client completes the session and
//! yields a [`CompletionReport`]; `close` abandons it without one.

use std::collections::{BTreeMap, BTreeSet};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use tend_attention::caseload::ClientSummary;
use tend_attention::level::ATTENTION_THRESHOLD;
use tend_core::models::action::ActionType;
use tend_core::models::command::ClientCommand;

use crate::error::ReviewError;
use crate::events::{ReviewEvent, ReviewEventKind};
use crate::executor::ActionExecutor;

/// Lowest score that earns a place in the guided review.
pub const REVIEW_THRESHOLD: u8 = ATTENTION_THRESHOLD;

pub const NOTHING_TO_REVIEW: &str = "No client currently requires attention";

/// Summaries at or above [`REVIEW_THRESHOLD`], highest score first.
pub fn review_queue(summaries: &[ClientSummary]) -> Vec<ClientSummary> {
    let mut queue: Vec<ClientSummary> = summaries
        .iter()
        .filter(|s| s.score >= REVIEW_THRESHOLD)
        .cloned()
        .collect();
    queue.sort_by(|a, b| b.score.cmp(&a.score));
    queue
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionRecord {
    pub action_type: ActionType,
    pub client_id: Uuid,
    pub recorded_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletionReport {
    pub clients_reviewed: usize,
    /// Distinct clients with at least one recorded action.
    pub clients_actioned: usize,
    pub action_counts: BTreeMap<ActionType, usize>,
    pub started_at: Timestamp,
    pub completed_at: Timestamp,
    pub elapsed_seconds: i64,
}

impl CompletionReport {
    fn new(
        queue_len: usize,
        log: &[ActionRecord],
        started_at: Timestamp,
        completed_at: Timestamp,
    ) -> Self {
        let mut action_counts = BTreeMap::new();
        for record in log {
            *action_counts.entry(record.action_type).or_insert(0) += 1;
        }
        let clients_actioned = log
            .iter()
            .map(|r| r.client_id)
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            clients_reviewed: queue_len,
            clients_actioned,
            action_counts,
            started_at,
            completed_at,
            elapsed_seconds: completed_at.duration_since(started_at).as_secs(),
        }
    }

    pub fn count(&self, action_type: ActionType) -> usize {
        self.action_counts.get(&action_type).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum ReviewState {
    Reviewing { index: usize },
    Completed { report: CompletionReport },
}

/// Outcome of starting a review.
#[derive(Debug)]
pub enum SessionStart {
    Started(ReviewSession),
    /// No client is at or above the review threshold.
    NothingToReview,
}

impl SessionStart {
    pub fn session(self) -> Option<ReviewSession> {
        match self {
            Self::Started(session) => Some(session),
            Self::NothingToReview => None,
        }
    }
}

#[derive(Debug)]
pub struct ReviewSession {
    id: Uuid,
    queue: Vec<ClientSummary>,
    state: ReviewState,
    log: Vec<ActionRecord>,
    started_at: Timestamp,
}

impl ReviewSession {
    /// Build the queue from `summaries` and stand on its first client.
    pub fn start(summaries: &[ClientSummary], started_at: Timestamp) -> SessionStart {
        let queue = review_queue(summaries);
        if queue.is_empty() {
            return SessionStart::NothingToReview;
        }

        let session = Self {
            id: Uuid::new_v4(),
            queue,
            state: ReviewState::Reviewing { index: 0 },
            log: Vec::new(),
            started_at,
        };
        ReviewEvent::new(ReviewEventKind::Started, session.id)
            .with_details(serde_json::json!({ "queue_len": session.queue.len() }))
            .emit();
        SessionStart::Started(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn queue(&self) -> &[ClientSummary] {
        &self.queue
    }

    pub fn log(&self) -> &[ActionRecord] {
        &self.log
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn report(&self) -> Option<&CompletionReport> {
        match &self.state {
            ReviewState::Completed { report } => Some(report),
            ReviewState::Reviewing { .. } => None,
        }
    }

    fn index(&self) -> Result<usize, ReviewError> {
        match self.state {
            ReviewState::Reviewing { index } => Ok(index),
            ReviewState::Completed { .. } => Err(ReviewError::SessionCompleted),
        }
    }

    /// The client under review.
    pub fn current(&self) -> Result<&ClientSummary, ReviewError> {
        let index = self.index()?;
        self.queue.get(index).ok_or(ReviewError::SessionCompleted)
    }

    /// Move on. Leaving the last client completes the session.
    pub fn next(&mut self, now: Timestamp) -> Result<&ReviewState, ReviewError> {
        let index = self.index()?;
        if index + 1 >= self.queue.len() {
            let report = CompletionReport::new(self.queue.len(), &self.log, self.started_at, now);
            ReviewEvent::new(ReviewEventKind::Completed, self.id)
                .with_details(serde_json::json!({
                    "clients_reviewed": report.clients_reviewed,
                    "clients_actioned": report.clients_actioned,
                    "elapsed_seconds": report.elapsed_seconds,
                }))
                .emit();
            self.state = ReviewState::Completed { report };
        } else {
            self.state = ReviewState::Reviewing { index: index + 1 };
        }
        Ok(&self.state)
    }

    /// Step back one client; stays put on the first.
    pub fn previous(&mut self) -> Result<&ReviewState, ReviewError> {
        let index = self.index()?;
        self.state = ReviewState::Reviewing {
            index: index.saturating_sub(1),
        };
        Ok(&self.state)
    }

    /// Log `action_type` against the current client. A snooze also moves
    /// on, since a snoozed client leaves this review.
    pub fn record_action(
        &mut self,
        action_type: ActionType,
        now: Timestamp,
    ) -> Result<&ReviewState, ReviewError> {
        let client_id = self.current()?.client.id;
        self.log.push(ActionRecord {
            action_type,
            client_id,
            recorded_at: now,
        });
        ReviewEvent::new(ReviewEventKind::ActionRecorded, self.id)
            .for_client(client_id)
            .with_action(action_type)
            .emit();

        if action_type == ActionType::Snooze {
            return self.next(now);
        }
        Ok(&self.state)
    }

    /// Hand `command` to `executor`, then record it. On failure nothing
    /// moves and nothing is logged.
    pub async fn perform(
        &mut self,
        command: &ClientCommand,
        executor: &dyn ActionExecutor,
        now: Timestamp,
    ) -> Result<&ReviewState, ReviewError> {
        let current = self.current()?.client.id;
        if command.client_id() != current {
            return Err(ReviewError::ClientMismatch {
                current,
                command: command.client_id(),
            });
        }

        let action_type = command.action_type();
        if let Err(e) = executor.execute(command).await {
            let e = e.with_action(action_type, current);
            ReviewEvent::new(ReviewEventKind::ActionFailed, self.id)
                .for_client(current)
                .with_action(action_type)
                .with_details(serde_json::json!({ "error": e.to_string() }))
                .emit();
            return Err(e);
        }

        self.record_action(action_type, now)
    }

    /// Abandon the session. No report is produced.
    pub fn close(self) {
        let position = match self.state {
            ReviewState::Reviewing { index } => Some(index),
            ReviewState::Completed { .. } => None,
        };
        ReviewEvent::new(ReviewEventKind::Closed, self.id)
            .with_details(serde_json::json!({
                "index": position,
                "actions": self.log.len(),
            }))
            .emit();
    }
}
