//! Data Transfer Objects for API requests and responses.
//!
//! Query parameters are parsed with Serde (`serde_with` for numeric strings)
//! and validated into domain types before reaching the services.

pub mod health;
pub mod pagination;
pub mod tools;
pub mod trend;
