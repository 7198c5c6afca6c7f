//! Source trait for the tool collection.

use async_trait::async_trait;

use crate::domain::entities::ToolRecord;

/// Failure to obtain the tool collection.
///
/// Every variant names the endpoint so the message is diagnosable on its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },

    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Malformed response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl FetchError {
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Network { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Provider of the full, unordered tool collection.
///
/// Each call is a fresh round-trip; implementations neither retry nor cache.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpToolSource`] - HTTP GET against the collection endpoint
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// Fetches every record the source currently holds.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on network failure, a non-success status, or a
    /// body that is not an array of tool records.
    async fn fetch(&self) -> Result<Vec<ToolRecord>, FetchError>;
}
