use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Daily physiological rollup from a wearable. Any metric the device did
/// not report is `None` and is left out of every average.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeviceSummary {
    pub date: jiff::civil::Date,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub sleep_score: Option<f64>,
    #[serde(default)]
    pub hrv_average: Option<f64>,
    #[serde(default)]
    pub activity_level: Option<f64>,
}

/// An observation generated by the device vendor's own analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeviceInsight {
    pub generated_at: jiff::Timestamp,
    pub severity: InsightSeverity,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InsightSeverity {
    Attention,
    Info,
    Positive,
}
