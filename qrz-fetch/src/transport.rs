//! Transport abstraction between the session client and the network.

use async_trait::async_trait;
use url::Url;

use crate::error::FetchError;

/// A raw response from the lookup service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a 200 response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs GET requests for the session client.
///
/// The production implementation is [`crate::HttpTransport`]; tests
/// substitute scripted transports.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a GET request and returns the status and body.
    async fn get(&self, url: &Url) -> Result<TransportResponse, FetchError>;
}
