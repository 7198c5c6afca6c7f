//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ToolRecord`] - A catalog entry as received from the collection endpoint
//! - [`ScoreBand`] - Display tier derived from a record's score
//! - [`PageView`] - One page of records with pagination metadata
//! - [`TimeSeries`] - Per-day record counts for the trend chart
//! - [`Lookback`] - Trend window length in days
//!
//! `PageView` and `TimeSeries` are derived views: they are rebuilt from the
//! full collection on every trigger and never updated in place.

pub mod lookback;
pub mod page_view;
pub mod score_band;
pub mod time_series;
pub mod tool;

pub use lookback::{LOOKBACK_OPTIONS, Lookback};
pub use page_view::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageView, is_page_size_option, total_pages,
};
pub use score_band::ScoreBand;
pub use time_series::{DAY_KEY_FORMAT, TimeSeries, TrendPoint};
pub use tool::ToolRecord;
