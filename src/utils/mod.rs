//! Utility functions shared across layers.
//!
//! - [`link_target`] - Query-string stripping for tool websites

pub mod link_target;
