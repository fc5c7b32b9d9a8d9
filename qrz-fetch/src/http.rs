//! HTTP transport with tracing and a domain allowlist.
//!
//! Request URLs carry the password or the session key in the query string,
//! so only the host and path are ever logged.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::transport::{Transport, TransportResponse};

/// User agent string for HTTP requests.
const USER_AGENT: &str = concat!("qrz/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Transport
// ============================================================================

/// reqwest-backed transport restricted to the configured service host.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
    allowed_domains: Vec<String>,
}

impl HttpTransport {
    /// Creates a transport for the given client configuration.
    ///
    /// Only the configured base host is reachable. A timeout is applied
    /// only when the configuration sets one.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: builder.build()?,
            allowed_domains: vec![config.host()?],
        })
    }

    /// Checks if a URL's domain is allowed.
    fn is_domain_allowed(&self, url: &Url) -> Result<(), FetchError> {
        let host = url
            .host_str()
            .ok_or_else(|| FetchError::DomainNotAllowed("No host in URL".to_string()))?;

        let allowed = self
            .allowed_domains
            .iter()
            .any(|domain| host == domain || host.ends_with(&format!(".{domain}")));

        if allowed {
            Ok(())
        } else {
            Err(FetchError::DomainNotAllowed(host.to_string()))
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, url), fields(host = url.host_str().unwrap_or_default(), path = url.path()))]
    async fn get(&self, url: &Url) -> Result<TransportResponse, FetchError> {
        self.is_domain_allowed(url)?;
        debug!("GET request");

        let response = self.inner.get(url.clone()).send().await?;
        let status = response.status();
        debug!(status = %status, "Response received");

        let body = response.text().await?;
        Ok(TransportResponse::new(status.as_u16(), body))
    }
}

/// Returns the canonical reason phrase for a status code.
pub(crate) fn reason_phrase(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown")
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================
