//! Week-over-week trends and weekly rollups.
//!
//! "Current" is the 7 calendar days ending today, "previous" the 7 days
//! before that. Records are bucketed by date, never by position, so a gap
//! in the data does not shift either window.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tend_core::clock::ReviewClock;
use tend_core::models::client::ClientSnapshot;
use tend_core::models::device::{DeviceInsight, DeviceSummary};
use tend_core::models::journal::JournalEntry;

/// Relative change beyond which a trend stops being stable.
pub const TREND_THRESHOLD: f64 = 0.10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

/// Direction of `current` relative to `previous`.
///
/// A zero baseline has no relative change: anything above zero is `Up`,
/// zero stays `Stable`.
pub fn trend(current: f64, previous: f64) -> Trend {
    if previous == 0.0 {
        return if current > 0.0 { Trend::Up } else { Trend::Stable };
    }
    let change = (current - previous) / previous;
    if change > TREND_THRESHOLD {
        Trend::Up
    } else if change < -TREND_THRESHOLD {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// [`trend`] over optional averages. A window without observations yields
/// `Stable` rather than a guessed direction.
pub fn trend_between(current: Option<f64>, previous: Option<f64>) -> Trend {
    match (current, previous) {
        (Some(current), Some(previous)) => trend(current, previous),
        _ => Trend::Stable,
    }
}

/// Fractional decline from `previous` to `current` (0.2 = down 20%).
/// `None` when either side is missing or the baseline is not positive.
pub fn relative_drop(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(current), Some(previous)) if previous > 0.0 => Some((previous - current) / previous),
        _ => None,
    }
}

/// Mean over observed values only. Empty input has no mean.
pub fn average<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

const MOOD_SCALE: &[(&str, f64)] = &[
    ("great", 5.0),
    ("good", 4.0),
    ("neutral", 3.0),
    ("low", 2.0),
    ("difficult", 1.0),
];

const ENERGY_SCALE: &[(&str, f64)] = &[
    ("very_high", 5.0),
    ("high", 4.0),
    ("moderate", 3.0),
    ("low", 2.0),
    ("exhausted", 1.0),
];

/// Scores at or below this count as a low mood or low energy day.
pub const LOW_ORDINAL: f64 = 2.0;

fn lookup(scale: &[(&str, f64)], label: &str) -> Option<f64> {
    let label = label.trim().to_ascii_lowercase();
    scale
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, score)| *score)
}

/// Ordinal 1–5 for a mood label; unknown labels are unobserved.
pub fn mood_score(label: &str) -> Option<f64> {
    lookup(MOOD_SCALE, label)
}

/// Ordinal 1–5 for an energy label; unknown labels are unobserved.
pub fn energy_score(label: &str) -> Option<f64> {
    lookup(ENERGY_SCALE, label)
}

pub fn entry_mood(entry: &JournalEntry) -> Option<f64> {
    entry.mood.as_deref().and_then(mood_score)
}

pub fn entry_energy(entry: &JournalEntry) -> Option<f64> {
    entry.energy.as_deref().and_then(energy_score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Current,
    Previous,
}

impl Window {
    /// The window `date` falls in, if any. Future dates belong to neither.
    pub fn of(clock: &ReviewClock, date: jiff::civil::Date) -> Option<Self> {
        match clock.days_since(date) {
            0..=6 => Some(Self::Current),
            7..=13 => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Records of one kind split into the two comparison windows.
#[derive(Debug)]
pub struct Weeks<'a, T> {
    pub current: Vec<&'a T>,
    pub previous: Vec<&'a T>,
}

impl<'a, T> Weeks<'a, T> {
    pub fn split(
        records: &'a [T],
        clock: &ReviewClock,
        date_of: impl Fn(&T) -> jiff::civil::Date,
    ) -> Self {
        let mut weeks = Self {
            current: Vec::new(),
            previous: Vec::new(),
        };
        for record in records {
            match Window::of(clock, date_of(record)) {
                Some(Window::Current) => weeks.current.push(record),
                Some(Window::Previous) => weeks.previous.push(record),
                None => {}
            }
        }
        weeks
    }

    pub fn get(&self, window: Window) -> &[&'a T] {
        match window {
            Window::Current => &self.current,
            Window::Previous => &self.previous,
        }
    }

    /// Average of `metric` over the records of `window` that report it.
    pub fn average_of(&self, window: Window, metric: impl Fn(&T) -> Option<f64>) -> Option<f64> {
        average(self.get(window).iter().filter_map(|r| metric(r)))
    }

    /// Current and previous averages of `metric`.
    pub fn compare(&self, metric: impl Fn(&T) -> Option<f64>) -> (Option<f64>, Option<f64>) {
        (
            self.average_of(Window::Current, &metric),
            self.average_of(Window::Previous, &metric),
        )
    }
}

pub type JournalWeeks<'a> = Weeks<'a, JournalEntry>;
pub type DeviceWeeks<'a> = Weeks<'a, DeviceSummary>;

pub fn journal_weeks<'a>(snapshot: &'a ClientSnapshot, clock: &ReviewClock) -> JournalWeeks<'a> {
    Weeks::split(&snapshot.journal_entries, clock, |e| e.date)
}

pub fn device_weeks<'a>(snapshot: &'a ClientSnapshot, clock: &ReviewClock) -> DeviceWeeks<'a> {
    Weeks::split(&snapshot.device_summaries, clock, |d| d.date)
}

pub fn adherence_ratio(entry: &JournalEntry) -> Option<f64> {
    Some(entry.adherence.ratio())
}

/// The journal rolled up into this week's view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklyStats {
    /// Mean adherence (0–1) over this week's entries; `None` without entries.
    pub average_adherence: Option<f64>,
    pub mood_trend: Trend,
    pub energy_trend: Trend,
    pub adherence_trend: Trend,
}

impl WeeklyStats {
    pub fn from_journal(weeks: &JournalWeeks<'_>) -> Self {
        let (adherence_now, adherence_before) = weeks.compare(adherence_ratio);
        let (mood_now, mood_before) = weeks.compare(entry_mood);
        let (energy_now, energy_before) = weeks.compare(entry_energy);

        Self {
            average_adherence: adherence_now,
            mood_trend: trend_between(mood_now, mood_before),
            energy_trend: trend_between(energy_now, energy_before),
            adherence_trend: trend_between(adherence_now, adherence_before),
        }
    }
}

pub fn weekly_stats(snapshot: &ClientSnapshot, clock: &ReviewClock) -> WeeklyStats {
    WeeklyStats::from_journal(&journal_weeks(snapshot, clock))
}

/// Wearable rollup for premium clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeviceStats {
    pub average_sleep_hours: Option<f64>,
    pub sleep_trend: Trend,
    pub average_hrv: Option<f64>,
    pub hrv_trend: Trend,
    pub recent_insights: Vec<DeviceInsight>,
}

/// Insights generated within the current window.
pub fn recent_insights<'a>(
    snapshot: &'a ClientSnapshot,
    clock: &'a ReviewClock,
) -> impl Iterator<Item = &'a DeviceInsight> + 'a {
    snapshot
        .device_insights
        .iter()
        .filter(move |i| Window::of(clock, clock.date_of(i.generated_at)) == Some(Window::Current))
}

/// `None` unless the client is premium and has device summaries.
pub fn device_stats(snapshot: &ClientSnapshot, clock: &ReviewClock) -> Option<DeviceStats> {
    if !snapshot.has_device_data() {
        return None;
    }
    let weeks = device_weeks(snapshot, clock);
    let (sleep_now, sleep_before) = weeks.compare(|d| d.sleep_hours);
    let (hrv_now, hrv_before) = weeks.compare(|d| d.hrv_average);

    Some(DeviceStats {
        average_sleep_hours: sleep_now,
        sleep_trend: trend_between(sleep_now, sleep_before),
        average_hrv: hrv_now,
        hrv_trend: trend_between(hrv_now, hrv_before),
        recent_insights: recent_insights(snapshot, clock).cloned().collect(),
    })
}
