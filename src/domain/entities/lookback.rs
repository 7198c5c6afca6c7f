//! Lookback window selected for the trend chart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Window lengths offered by the range selector, with their labels.
pub const LOOKBACK_OPTIONS: [(u32, &str); 3] = [
    (90, "last 3 months"),
    (30, "last 30 days"),
    (7, "last 7 days"),
];

/// Number of days back from today included in the trend series.
///
/// Any day count is accepted; only the values in [`LOOKBACK_OPTIONS`] carry a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lookback(u32);

impl Lookback {
    pub const THREE_MONTHS: Self = Self(90);
    pub const THIRTY_DAYS: Self = Self(30);
    pub const SEVEN_DAYS: Self = Self(7);

    pub fn days(days: u32) -> Self {
        Self(days)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Display label, if this is one of the recognized options.
    pub fn label(self) -> Option<&'static str> {
        LOOKBACK_OPTIONS
            .iter()
            .find(|(days, _)| *days == self.0)
            .map(|(_, label)| *label)
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::THREE_MONTHS
    }
}

impl From<u32> for Lookback {
    fn from(days: u32) -> Self {
        Self(days)
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "last {} days", self.0),
        }
    }
}
