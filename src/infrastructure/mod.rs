//! Infrastructure layer for external integrations.
//!
//! Implements the [`crate::domain::repositories::ToolSource`] contract against
//! the real collection endpoint.
//!
//! # Modules
//!
//! - [`http`] - `reqwest`-backed tool source

pub mod http;
