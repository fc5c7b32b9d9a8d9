//! Client configuration.
//!
//! The endpoint, API version and agent string are fixed for a run and are
//! injected into the session client when it is built.

use std::time::Duration;
use url::Url;

use crate::error::FetchError;

/// Default base URL of the XML lookup service.
pub const DEFAULT_BASE_URL: &str = "https://xmldata.qrz.com";

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "current";

/// Agent identifier sent with every request.
pub const DEFAULT_AGENT: &str = concat!("qrz-rs-", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Client Config
// ============================================================================

/// Immutable configuration for the session client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_version: String,
    agent: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a builder starting from the defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API version path segment.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the agent identifier.
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// Returns the request timeout, if one is imposed.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the versioned endpoint every request targets.
    pub fn endpoint(&self) -> Result<Url, FetchError> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/xml/{}/", self.api_version))?)
    }

    /// Returns the host of the endpoint.
    pub fn host(&self) -> Result<String, FetchError> {
        let endpoint = self.endpoint()?;
        endpoint
            .host_str()
            .map(str::to_string)
            .ok_or_else(|| FetchError::InvalidResponse("No host in base URL".to_string()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: String,
    api_version: String,
    agent: String,
    timeout: Option<Duration>,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            agent: DEFAULT_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfigBuilder {
    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the API version path segment.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the agent identifier.
    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    /// Sets a request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url,
            api_version: self.api_version,
            agent: self.agent,
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://xmldata.qrz.com/xml/current/"
        );
        assert_eq!(config.host().unwrap(), "xmldata.qrz.com");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8080/")
            .api_version("1.34")
            .agent("test-agent")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://localhost:8080/xml/1.34/"
        );
        assert_eq!(config.agent(), "test-agent");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::builder().base_url("not a url").build();
        assert!(matches!(config.endpoint(), Err(FetchError::InvalidUrl(_))));
    }
}
