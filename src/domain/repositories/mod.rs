//! Data access trait definitions.
//!
//! The domain only knows the collection through [`ToolSource`]; the concrete
//! HTTP implementation lives in [`crate::infrastructure`].

pub mod tool_source;

#[cfg(test)]
pub use tool_source::MockToolSource;
pub use tool_source::{FetchError, ToolSource};
