mod common;

use tend_attention::trend::{
    Trend, Window, WeeklyStats, average, device_stats, energy_score, journal_weeks, mood_score,
    relative_drop, trend, trend_between, weekly_stats,
};
use tend_core::models::device::InsightSeverity;
use tend_core::models::journal::JournalEntry;

use common::{ClientBuilder, clock, days_ago, device, entry, entry_with};

#[test]
fn trend_uses_ten_percent_band() {
    assert_eq!(trend(111.0, 100.0), Trend::Up);
    assert_eq!(trend(110.0, 100.0), Trend::Stable);
    assert_eq!(trend(100.0, 100.0), Trend::Stable);
    assert_eq!(trend(90.0, 100.0), Trend::Stable);
    assert_eq!(trend(89.0, 100.0), Trend::Down);
}

#[test]
fn zero_baseline_never_divides() {
    for current in [0.5, 1.0, 3.0, 100.0] {
        assert_eq!(trend(current, 0.0), Trend::Up, "current = {current}");
    }
    assert_eq!(trend(0.0, 0.0), Trend::Stable);
}

#[test]
fn missing_window_is_stable() {
    assert_eq!(trend_between(Some(3.0), None), Trend::Stable);
    assert_eq!(trend_between(None, Some(3.0)), Trend::Stable);
    assert_eq!(trend_between(Some(1.0), Some(3.0)), Trend::Down);
}

#[test]
fn relative_drop_needs_positive_baseline() {
    assert_eq!(relative_drop(Some(80.0), Some(100.0)), Some(0.2));
    assert_eq!(relative_drop(Some(80.0), Some(0.0)), None);
    assert_eq!(relative_drop(None, Some(100.0)), None);
}

#[test]
fn average_of_nothing_is_none() {
    assert_eq!(average(std::iter::empty()), None);
    assert_eq!(average([1.0, 2.0, 3.0]), Some(2.0));
}

#[test]
fn labels_map_through_tables() {
    assert_eq!(mood_score("great"), Some(5.0));
    assert_eq!(mood_score(" Low "), Some(2.0));
    assert_eq!(mood_score("ecstatic"), None);
    assert_eq!(energy_score("exhausted"), Some(1.0));
    assert_eq!(energy_score("VERY_HIGH"), Some(5.0));
    assert_eq!(energy_score(""), None);
}

#[test]
fn windows_follow_calendar_dates() {
    let clock = clock();
    assert_eq!(Window::of(&clock, days_ago(0)), Some(Window::Current));
    assert_eq!(Window::of(&clock, days_ago(6)), Some(Window::Current));
    assert_eq!(Window::of(&clock, days_ago(7)), Some(Window::Previous));
    assert_eq!(Window::of(&clock, days_ago(13)), Some(Window::Previous));
    assert_eq!(Window::of(&clock, days_ago(14)), None);
    assert_eq!(Window::of(&clock, days_ago(-1)), None);
}

#[test]
fn gaps_do_not_shift_windows() {
    // Two entries only, far apart: each stays in its own window.
    let client = ClientBuilder::new("Ines")
        .entry(entry_with(1, 4))
        .entry(entry_with(12, 2))
        .build();
    let clock = clock();
    let weeks = journal_weeks(&client, &clock);
    assert_eq!(weeks.current.len(), 1);
    assert_eq!(weeks.previous.len(), 1);
    assert_eq!(weeks.current[0].date, days_ago(1));
}

#[test]
fn unmapped_moods_stay_out_of_the_average() {
    let client = ClientBuilder::new("Ines")
        .entry(JournalEntry {
            mood: Some("good".into()),
            ..entry(1)
        })
        .entry(JournalEntry {
            mood: Some("meh".into()),
            ..entry(2)
        })
        .entry(entry(3))
        .entry(JournalEntry {
            mood: Some("neutral".into()),
            ..entry(8)
        })
        .build();
    let clock = clock();
    let weeks = journal_weeks(&client, &clock);
    let (now, before) = weeks.compare(|e| e.mood.as_deref().and_then(mood_score));
    assert_eq!(now, Some(4.0));
    assert_eq!(before, Some(3.0));

    // 4 vs 3 is +33%.
    assert_eq!(weekly_stats(&client, &clock).mood_trend, Trend::Up);
}

#[test]
fn weekly_stats_roll_up_adherence() {
    let client = ClientBuilder::new("Ines")
        .entries([entry_with(1, 1), entry_with(2, 1)])
        .entries([entry_with(8, 3), entry_with(9, 3)])
        .build();

    let stats = weekly_stats(&client, &clock());
    assert_eq!(stats.average_adherence, Some(0.25));
    assert_eq!(stats.adherence_trend, Trend::Down);
    assert_eq!(stats.mood_trend, Trend::Stable);
}

#[test]
fn empty_journal_has_no_average() {
    let client = ClientBuilder::new("Ines").build();
    assert_eq!(weekly_stats(&client, &clock()), WeeklyStats::default());
}

#[test]
fn device_stats_only_for_premium_with_data() {
    let night = |days, hours| tend_core::models::device::DeviceSummary {
        sleep_hours: Some(hours),
        hrv_average: Some(50.0),
        ..device(days)
    };

    let basic = ClientBuilder::new("Ines").device(night(1, 7.0)).build();
    assert!(device_stats(&basic, &clock()).is_none());

    let premium_without_data = ClientBuilder::new("Ines").premium().build();
    assert!(device_stats(&premium_without_data, &clock()).is_none());

    let premium = ClientBuilder::new("Ines")
        .premium()
        .device(night(1, 5.0))
        .device(night(2, 6.0))
        .device(night(8, 8.0))
        .insight(InsightSeverity::Attention, 2)
        .insight(InsightSeverity::Info, 20)
        .build();
    let stats = device_stats(&premium, &clock()).unwrap();
    assert_eq!(stats.average_sleep_hours, Some(5.5));
    assert_eq!(stats.sleep_trend, Trend::Down);
    assert_eq!(stats.hrv_trend, Trend::Stable);
    assert_eq!(stats.recent_insights.len(), 1);
}
