//! HTTP client integrations.

mod tool_source;

pub use tool_source::HttpToolSource;
