//! DTOs for the trend chart.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{Lookback, TimeSeries};

/// Query parameters for the trend endpoint.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct TrendParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub range: Option<u32>,
}

impl TrendParams {
    /// Validates the lookback window. Defaults to 90 days; zero is rejected.
    pub fn validate(&self) -> Result<Lookback, String> {
        match self.range {
            None => Ok(Lookback::default()),
            Some(0) => Err("Range must be at least 1 day".to_string()),
            Some(days) => Ok(Lookback::days(days)),
        }
    }
}

/// Daily counts for the selected window.
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub range: u32,
    /// `null` for windows outside the recognized options.
    pub label: Option<&'static str>,
    /// First day included, `YYYY-MM-DD`.
    pub since: String,
    pub points: Vec<TrendPointItem>,
}

/// One chart point.
#[derive(Debug, Serialize)]
pub struct TrendPointItem {
    pub day: String,
    pub label: String,
    pub count: u32,
}

impl TrendResponse {
    pub fn new(range: Lookback, since: String, series: TimeSeries) -> Self {
        Self {
            range: range.get(),
            label: range.label(),
            since,
            points: series
                .points
                .into_iter()
                .map(|point| TrendPointItem {
                    label: point.display_label(),
                    day: point.day,
                    count: point.count,
                })
                .collect(),
        }
    }
}
