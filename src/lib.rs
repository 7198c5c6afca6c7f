//! # Tool Trends
//!
//! Paginated table and daily trend series over a remote tool collection.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Tool records, derived views, source contract, clock
//! - **Application Layer** ([`application`]) - Pagination, aggregation, pipelines
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP collection source
//! - **API Layer** ([`api`]) - JSON endpoints over the transformation engine
//!
//! ## Data Flow
//!
//! Each trigger fetches the full collection, then runs one pure transformation:
//! [`application::services::paginate`] for the table or
//! [`application::services::aggregate`] for the trend chart. The
//! [`application::services::Dashboard`] keeps the two pipelines independent and
//! drops results that arrive after a newer trigger.
//!
//! ## Quick Start
//!
//! ```bash
//! export TOOLS_SOURCE_URL="https://api.example.com/tools"
//!
//! # JSON API
//! cargo run
//!
//! # Terminal view
//! cargo run --bin board -- table --page 2 --page-size 20
//! cargo run --bin board -- trend --range 30
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        Controls, Dashboard, ViewState, aggregate, paginate,
    };
    pub use crate::domain::clock::{Clock, FixedClock, SystemClock};
    pub use crate::domain::entities::{
        Lookback, PageView, ScoreBand, TimeSeries, ToolRecord, TrendPoint,
    };
    pub use crate::domain::repositories::{FetchError, ToolSource};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpToolSource;
    pub use crate::state::AppState;
}
