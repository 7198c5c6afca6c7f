//! Display tiers derived from a tool's score.

use serde::Serialize;
use std::fmt;

/// Lower bound (inclusive) of the "great" tier.
pub const GREAT_THRESHOLD: f64 = 8.0;

/// Lower bound (inclusive) of the "pretty good" tier.
pub const PRETTY_GOOD_THRESHOLD: f64 = 6.5;

/// Score tier shown next to a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NotYetEvaluated,
    Great,
    PrettyGood,
    Meh,
}

impl ScoreBand {
    /// Classifies an optional score. `None` means the tool has not been scored yet.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Self::NotYetEvaluated,
            Some(s) if s >= GREAT_THRESHOLD => Self::Great,
            Some(s) if s >= PRETTY_GOOD_THRESHOLD => Self::PrettyGood,
            Some(_) => Self::Meh,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotYetEvaluated => "not yet evaluated",
            Self::Great => "great",
            Self::PrettyGood => "pretty good",
            Self::Meh => "meh",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
