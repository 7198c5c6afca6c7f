//! HTTP request handlers for API endpoints.
//!
//! Each handler runs one fetch followed by the matching pure transformation.

pub mod health;
pub mod tools;
pub mod trend;

pub use health::health_handler;
pub use tools::tools_handler;
pub use trend::trend_handler;
