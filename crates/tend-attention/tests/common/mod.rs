#![allow(dead_code)]

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp, ToSpan};
use uuid::Uuid;

use tend_attention::caseload::ClientSummary;
use tend_core::clock::ReviewClock;
use tend_core::models::care_plan::{CarePlan, CarePlanStatus};
use tend_core::models::client::{ClientSnapshot, SnoozeReason, SnoozeState};
use tend_core::models::device::{DeviceInsight, DeviceSummary, InsightSeverity};
use tend_core::models::journal::{AdherenceFlags, JournalEntry};
use tend_core::models::message::{Message, SenderRole};
use tend_core::models::schedule::Schedule;

/// Tuesday morning, UTC.
pub fn now() -> Timestamp {
    "2026-03-10T09:00:00Z".parse().unwrap()
}

pub fn clock() -> ReviewClock {
    ReviewClock::at(now(), TimeZone::UTC)
}

pub fn days_ago(days: i64) -> Date {
    clock().today().checked_sub(days.days()).unwrap()
}

pub fn instant_days_ago(days: i64) -> Timestamp {
    hours_from_now(-24 * days)
}

pub fn hours_from_now(hours: i64) -> Timestamp {
    now().checked_add(SignedDuration::from_hours(hours)).unwrap()
}

/// The first `completed` adherence flags set.
pub fn flags(completed: usize) -> AdherenceFlags {
    AdherenceFlags {
        hydration: completed > 0,
        movement: completed > 1,
        nutrition: completed > 2,
        rest: completed > 3,
    }
}

/// A bare journal entry: no mood, no energy, no notes, no flags.
pub fn entry(days: i64) -> JournalEntry {
    JournalEntry {
        date: days_ago(days),
        mood: None,
        energy: None,
        notes: None,
        adherence: AdherenceFlags::default(),
    }
}

pub fn entry_with(days: i64, completed: usize) -> JournalEntry {
    JournalEntry {
        adherence: flags(completed),
        ..entry(days)
    }
}

pub fn device(days: i64) -> DeviceSummary {
    DeviceSummary {
        date: days_ago(days),
        sleep_hours: None,
        sleep_score: None,
        hrv_average: None,
        activity_level: None,
    }
}

/// A long-standing client last seen 20 days ago. Scores exactly zero:
/// no condition fires and no moderator applies.
pub struct ClientBuilder {
    snapshot: ClientSnapshot,
}

impl ClientBuilder {
    pub fn new(first_name: &str) -> Self {
        Self {
            snapshot: ClientSnapshot {
                id: Uuid::new_v4(),
                first_name: first_name.to_string(),
                last_name: "Test".to_string(),
                is_premium: false,
                created_at: instant_days_ago(60),
                is_active: true,
                is_deleted: false,
                snooze: SnoozeState::default(),
                journal_entries: Vec::new(),
                device_summaries: Vec::new(),
                device_insights: Vec::new(),
                messages: Vec::new(),
                care_plans: Vec::new(),
                schedule: Schedule {
                    last_consultation_at: Some(instant_days_ago(20)),
                    next_appointment_at: None,
                    last_session_note_at: Some(instant_days_ago(20)),
                },
            },
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.snapshot.id = id;
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.snapshot.created_at = instant_days_ago(days);
        self
    }

    pub fn premium(mut self) -> Self {
        self.snapshot.is_premium = true;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.snapshot.is_active = false;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.snapshot.is_deleted = true;
        self
    }

    pub fn never_consulted(mut self) -> Self {
        self.snapshot.schedule = Schedule::default();
        self
    }

    pub fn last_consultation(mut self, at: Timestamp) -> Self {
        self.snapshot.schedule.last_consultation_at = Some(at);
        self
    }

    pub fn session_note(mut self, at: Option<Timestamp>) -> Self {
        self.snapshot.schedule.last_session_note_at = at;
        self
    }

    pub fn next_appointment(mut self, at: Timestamp) -> Self {
        self.snapshot.schedule.next_appointment_at = Some(at);
        self
    }

    pub fn entry(mut self, entry: JournalEntry) -> Self {
        self.snapshot.journal_entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = JournalEntry>) -> Self {
        self.snapshot.journal_entries.extend(entries);
        self
    }

    pub fn message(mut self, sender: SenderRole, sent_days_ago: i64, read: bool) -> Self {
        let sent_at = instant_days_ago(sent_days_ago);
        self.snapshot.messages.push(Message {
            sender,
            sent_at,
            read_at: read.then_some(sent_at),
        });
        self
    }

    pub fn unread_message(self) -> Self {
        self.message(SenderRole::Client, 1, false)
    }

    pub fn device(mut self, summary: DeviceSummary) -> Self {
        self.snapshot.device_summaries.push(summary);
        self
    }

    pub fn insight(mut self, severity: InsightSeverity, days: i64) -> Self {
        self.snapshot.device_insights.push(DeviceInsight {
            generated_at: instant_days_ago(days),
            severity,
            title: "Device insight".to_string(),
        });
        self
    }

    pub fn care_plan(mut self, status: CarePlanStatus, updated_days_ago: i64) -> Self {
        self.snapshot.care_plans.push(CarePlan {
            id: Uuid::new_v4(),
            status,
            updated_at: instant_days_ago(updated_days_ago),
        });
        self
    }

    pub fn snoozed_until(mut self, until: Timestamp) -> Self {
        self.snapshot.snooze = SnoozeState {
            is_snoozed: true,
            snooze_until: Some(until),
            snooze_reason: Some(SnoozeReason::Vacation),
        };
        self
    }

    pub fn build(self) -> ClientSnapshot {
        self.snapshot
    }
}

/// Seven clients across the tiers, three of them tied at zero.
pub fn mixed_caseload() -> Vec<ClientSnapshot> {
    vec![
        ClientBuilder::new("Quiet").build(),
        ClientBuilder::new("Empty").entries([entry(2), entry(3), entry(4)]).build(),
        ClientBuilder::new("Unread").unread_message().build(),
        ClientBuilder::new("Cooling").entry(entry(4)).build(),
        ClientBuilder::new("Slipping")
            .entries([entry_with(2, 1), entry_with(3, 1), entry_with(4, 1)])
            .entries([entry_with(8, 4), entry_with(9, 4), entry_with(10, 4)])
            .build(),
        ClientBuilder::new("Quiet too").build(),
        ClientBuilder::new("New").never_consulted().build(),
    ]
}

pub fn by_client_id(mut summaries: Vec<ClientSummary>) -> Vec<ClientSummary> {
    summaries.sort_by_key(|s| s.client.id);
    summaries
}
