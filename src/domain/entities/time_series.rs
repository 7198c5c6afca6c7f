//! Per-day record counts for the trend chart.

use chrono::NaiveDate;
use serde::Serialize;

/// Format of bucket keys and of the `since` boundary.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format of chart axis labels, e.g. `Jan 3`.
pub const DAY_LABEL_FORMAT: &str = "%b %-d";

/// Count of records created on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Bucket key, `YYYY-MM-DD`.
    pub day: String,
    pub count: u32,
}

impl TrendPoint {
    pub fn new(day: impl Into<String>, count: u32) -> Self {
        Self {
            day: day.into(),
            count,
        }
    }

    /// Axis label for this bucket. Falls back to the raw key if it is not a valid date.
    pub fn display_label(&self) -> String {
        NaiveDate::parse_from_str(&self.day, DAY_KEY_FORMAT)
            .map(|date| date.format(DAY_LABEL_FORMAT).to_string())
            .unwrap_or_else(|_| self.day.clone())
    }
}

/// Ascending, gap-free-of-duplicates series of daily counts.
///
/// Days without records are absent rather than zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeSeries {
    pub points: Vec<TrendPoint>,
}

impl TimeSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| u64::from(p.count)).sum()
    }

    /// Largest single-day count, or zero for an empty series.
    pub fn peak(&self) -> u32 {
        self.points.iter().map(|p| p.count).max().unwrap_or(0)
    }
}
