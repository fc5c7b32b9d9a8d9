//! Fetch error types.

use thiserror::Error;

/// Error type for lookup operations.
///
/// [`FetchError::AuthenticationFailed`] is the one variant the batch
/// orchestrator treats specially: it means the service rejected the session
/// key and the lookup can succeed after re-authenticating. Every other
/// variant is a generic failure for the term that produced it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    ///
    /// Request URLs carry the password or session key, so the URL is
    /// stripped before the error is stored.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The service answered with a non-success status.
    #[error("HTTP error: {status} {reason}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// The service reported the session key as expired or invalid.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The service reported an error unrelated to the session.
    #[error("QRZ API Error: {0}")]
    Service(String),

    /// The response was not a usable QRZ document.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Domain not allowed.
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// No credentials could be obtained for re-authentication.
    #[error("Credentials unavailable: {0}")]
    Credentials(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Http(e.without_url())
    }
}

impl FetchError {
    /// Returns true if this error means the session must be renewed.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, FetchError::AuthenticationFailed(_))
    }
}
