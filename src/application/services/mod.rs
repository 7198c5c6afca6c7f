//! Transformation and orchestration services.
//!
//! - [`paginator`] - Pure page slicing
//! - [`aggregator`] - Pure daily bucketing over a lookback window
//! - [`pipeline`] - Per-pipeline load state with stale-result protection
//! - [`dashboard`] - Control state driving the table and chart pipelines

pub mod aggregator;
pub mod dashboard;
pub mod paginator;
pub mod pipeline;

pub use aggregator::{aggregate, since_key};
pub use dashboard::{Controls, Dashboard};
pub use paginator::paginate;
pub use pipeline::{Pipeline, Ticket, ViewState};
