//! The reference instant every "days since" and "this week" computation
//! is measured from.
//!
//! The engine never reads the system clock. Callers build a [`ReviewClock`]
//! once per pass and hand it down, so a pass is fully reproducible.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewClock {
    now: Zoned,
}

impl ReviewClock {
    pub fn new(now: Zoned) -> Self {
        Self { now }
    }

    /// Pin the clock to `now`, observed in `time_zone`.
    pub fn at(now: Timestamp, time_zone: TimeZone) -> Self {
        Self {
            now: now.to_zoned(time_zone),
        }
    }

    /// Pin the clock to `now` in the IANA time zone named `tz_name`.
    pub fn in_zone(now: Timestamp, tz_name: &str) -> Result<Self, CoreError> {
        let tz = TimeZone::get(tz_name)
            .map_err(|_| CoreError::UnknownTimeZone(tz_name.to_string()))?;
        Ok(Self::at(now, tz))
    }

    pub fn now(&self) -> Timestamp {
        self.now.timestamp()
    }

    pub fn zoned(&self) -> &Zoned {
        &self.now
    }

    pub fn today(&self) -> Date {
        self.now.date()
    }

    /// Calendar date of `ts` in the clock's time zone.
    pub fn date_of(&self, ts: Timestamp) -> Date {
        ts.to_zoned(self.now.time_zone().clone()).date()
    }

    /// Whole calendar days from `date` to today. Negative for future dates.
    pub fn days_since(&self, date: Date) -> i32 {
        (self.today() - date).get_days()
    }

    pub fn days_since_instant(&self, ts: Timestamp) -> i32 {
        self.days_since(self.date_of(ts))
    }

    /// Elapsed hours from `ts` to now. Negative when `ts` is in the future.
    pub fn hours_since(&self, ts: Timestamp) -> f64 {
        self.now().duration_since(ts).as_secs_f64() / 3600.0
    }
}
