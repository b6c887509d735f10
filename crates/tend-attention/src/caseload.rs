//! The morning review: every client in a caseload scored, explained and
//! ranked.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use tend_core::clock::ReviewClock;
use tend_core::models::client::{ClientIdentity, ClientSnapshot};

use crate::actions::{SuggestedAction, recommend_actions};
use crate::error::AttentionError;
use crate::level::{AttentionLevel, PROGRESS_THRESHOLD};
use crate::score::{ScoreBreakdown, score_client};
use crate::signal::{Signal, SignalInput, resolve_signal};
use crate::trend::{DeviceStats, WeeklyStats, device_stats, weekly_stats};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Lowest score that puts a client on the plain attention list.
pub const ATTENTION_QUEUE_THRESHOLD: u8 = PROGRESS_THRESHOLD;

/// Where caseloads come from. Implemented by the data layer.
pub trait CaseloadSource: Send + Sync {
    /// Every client of `practitioner_id`, with at least the trailing 30
    /// days of history. A partial caseload must be an error, never `Ok`.
    fn fetch_caseload(
        &self,
        practitioner_id: Uuid,
    ) -> BoxFuture<'_, Result<Vec<ClientSnapshot>, AttentionError>>;
}

/// One client's place in the morning review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientSummary {
    pub client: ClientIdentity,
    pub score: u8,
    pub level: AttentionLevel,
    pub weekly_stats: WeeklyStats,
    pub device_stats: Option<DeviceStats>,
    pub signal: Option<Signal>,
    pub suggested_actions: Vec<SuggestedAction>,
    pub breakdown: ScoreBreakdown,
}

/// Score, classify and explain one client.
pub fn summarize_client(snapshot: &ClientSnapshot, clock: &ReviewClock) -> ClientSummary {
    let client = snapshot.identity();
    let breakdown = score_client(snapshot, clock);
    let weekly_stats = weekly_stats(snapshot, clock);

    if breakdown.snoozed {
        tracing::debug!(client_id = %client.id, "client snoozed, skipping signals");
        return ClientSummary {
            client,
            score: 0,
            level: AttentionLevel::Stable,
            weekly_stats,
            device_stats: None,
            signal: None,
            suggested_actions: Vec::new(),
            breakdown,
        };
    }

    let score = breakdown.score;
    let level = AttentionLevel::classify(snapshot, score);
    let device_stats = device_stats(snapshot, clock);
    let signal = resolve_signal(&SignalInput {
        snapshot,
        clock,
        weekly: &weekly_stats,
        device: device_stats.as_ref(),
    });
    let suggested_actions = recommend_actions(signal.as_ref(), &client);

    ClientSummary {
        client,
        score,
        level,
        weekly_stats,
        device_stats,
        signal,
        suggested_actions,
        breakdown,
    }
}

/// Summaries for a whole caseload, highest score first.
///
/// Deleted clients are left out. Ties keep input order.
pub fn summarize_caseload(snapshots: &[ClientSnapshot], clock: &ReviewClock) -> Vec<ClientSummary> {
    let live: Vec<&ClientSnapshot> = snapshots
        .iter()
        .filter(|s| {
            if s.is_deleted {
                tracing::debug!(client_id = %s.id, "skipping deleted client");
            }
            !s.is_deleted
        })
        .collect();

    #[cfg(feature = "parallel")]
    let mut summaries: Vec<ClientSummary> = {
        use rayon::prelude::*;
        live.par_iter()
            .map(|s| summarize_client(s, clock))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut summaries: Vec<ClientSummary> = live
        .iter()
        .map(|s| summarize_client(s, clock))
        .collect();

    // `sort_by` is stable.
    summaries.sort_by(|a, b| b.score.cmp(&a.score));
    summaries
}

/// Summaries at or above the attention-list threshold, in ranked order.
pub fn attention_queue(summaries: &[ClientSummary]) -> Vec<&ClientSummary> {
    summaries
        .iter()
        .filter(|s| s.score >= ATTENTION_QUEUE_THRESHOLD)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseloadOverview {
    pub total: usize,
    pub urgent: usize,
    pub attention: usize,
    pub progress: usize,
    pub stable: usize,
    pub insufficient: usize,
    pub snoozed: usize,
}

impl CaseloadOverview {
    pub fn from_summaries(summaries: &[ClientSummary]) -> Self {
        let mut overview = Self {
            total: summaries.len(),
            ..Self::default()
        };
        for summary in summaries {
            match summary.level {
                AttentionLevel::Urgent => overview.urgent += 1,
                AttentionLevel::Attention => overview.attention += 1,
                AttentionLevel::Progress => overview.progress += 1,
                AttentionLevel::Stable => overview.stable += 1,
                AttentionLevel::Insufficient => overview.insufficient += 1,
            }
            if summary.breakdown.snoozed {
                overview.snoozed += 1;
            }
        }
        overview
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MorningReview {
    pub generated_at: jiff::Timestamp,
    pub overview: CaseloadOverview,
    pub clients: Vec<ClientSummary>,
}

impl MorningReview {
    pub fn from_snapshots(snapshots: &[ClientSnapshot], clock: &ReviewClock) -> Self {
        let clients = summarize_caseload(snapshots, clock);
        let overview = CaseloadOverview::from_summaries(&clients);
        tracing::info!(
            clients = overview.total,
            urgent = overview.urgent,
            attention = overview.attention,
            snoozed = overview.snoozed,
            "caseload scored"
        );
        Self {
            generated_at: clock.now(),
            overview,
            clients,
        }
    }

    pub fn attention_queue(&self) -> Vec<&ClientSummary> {
        attention_queue(&self.clients)
    }
}

/// Fetch a practitioner's caseload and score it. A failed fetch fails the
/// whole pass; nothing is scored from a partial caseload.
pub async fn build_morning_review(
    source: &dyn CaseloadSource,
    practitioner_id: Uuid,
    clock: &ReviewClock,
) -> Result<MorningReview, AttentionError> {
    let snapshots = source.fetch_caseload(practitioner_id).await.inspect_err(|e| {
        tracing::warn!(practitioner_id = %practitioner_id, error = %e, "caseload fetch failed");
    })?;
    Ok(MorningReview::from_snapshots(&snapshots, clock))
}
