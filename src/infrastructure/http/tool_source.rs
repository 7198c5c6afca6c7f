//! HTTP implementation of the tool source.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

use crate::domain::entities::ToolRecord;
use crate::domain::repositories::{FetchError, ToolSource};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches the whole collection with a single GET per call.
///
/// No retries and no caching: every [`ToolSource::fetch`] is a fresh round-trip.
/// A request timeout is applied only when one is configured.
pub struct HttpToolSource {
    client: Client,
    endpoint: String,
}

impl HttpToolSource {
    /// Creates a source for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let endpoint = endpoint.into();

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| FetchError::Network {
            endpoint: endpoint.clone(),
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn network_error(&self, e: reqwest::Error) -> FetchError {
        FetchError::Network {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl ToolSource for HttpToolSource {
    async fn fetch(&self) -> Result<Vec<ToolRecord>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, status = status.as_u16(), "Collection request rejected");
            return Err(FetchError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.network_error(e))?;

        let records: Vec<ToolRecord> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(endpoint = %self.endpoint, count = records.len(), "Fetched tool collection");
        Ok(records)
    }
}
