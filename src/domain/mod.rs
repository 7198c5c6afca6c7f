//! Domain layer containing entities, the data source contract and the clock.
//!
//! # Architecture
//!
//! - [`entities`] - Tool records and the derived page/trend views
//! - [`repositories`] - The [`repositories::ToolSource`] contract and its error type
//! - [`clock`] - Injectable "today" used by the trend window
//!
//! The domain layer has no dependency on HTTP, configuration or presentation.

pub mod clock;
pub mod entities;
pub mod repositories;
