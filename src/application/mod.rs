//! Application layer: the transformation engine and the pipelines around it.
//!
//! Pagination and aggregation are pure functions over the full collection;
//! the [`services::Dashboard`] threads control state into them and guards each
//! pipeline against out-of-order completions.
//!
//! # Available Services
//!
//! - [`services::paginate`] - Page slicing with a one-page floor
//! - [`services::aggregate`] - Per-day counts within a lookback window
//! - [`services::Pipeline`] - `Idle/Loading/Ready/Failed` with generation tickets
//! - [`services::Dashboard`] - Table and chart pipelines driven by controls

pub mod services;
