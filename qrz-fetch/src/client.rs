//! Session client for the QRZ XML service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qrz_core::{Callsign, Dxcc, SessionToken};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::http::{HttpTransport, reason_phrase};
use crate::lookup::LookupClient;
use crate::response;
use crate::transport::Transport;

// ============================================================================
// Session Client
// ============================================================================

/// Authenticates against the service and performs single lookups.
///
/// The client owns the session token. Lookups renew it first when it has
/// expired, and mark it expired when the service rejects it.
pub struct QrzClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
    username: String,
    password: String,
    session: SessionToken,
}

impl QrzClient<HttpTransport> {
    /// Creates a client that talks to the network.
    pub fn new(
        config: ClientConfig,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self::with_transport(config, transport, username, password))
    }
}

impl<T: Transport> QrzClient<T> {
    /// Creates a client over the given transport.
    pub fn with_transport(
        config: ClientConfig,
        transport: T,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            config,
            transport,
            username: username.into(),
            password: password.into(),
            session: SessionToken::default(),
        }
    }

    /// Starts from a previously persisted session.
    #[must_use]
    pub fn with_session(mut self, session: SessionToken) -> Self {
        self.session = session;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the username (callsign) used to authenticate.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns true if a password is set.
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    /// Replaces the session token.
    pub fn set_session(&mut self, session: SessionToken) {
        self.session = session;
    }

    /// Returns true if the token is valid at `now`.
    pub fn token_is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.session.is_valid_at(now)
    }

    /// Builds a request URL with the agent appended.
    fn request_url(&self, params: &[(&str, &str)]) -> Result<Url, FetchError> {
        let mut url = self.config.endpoint()?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("agent", self.config.agent());
        Ok(url)
    }

    /// Sends a request and returns the body of a successful response.
    async fn send(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(FetchError::HttpStatus {
                status: response.status,
                reason: reason_phrase(response.status),
            });
        }
        Ok(response.body)
    }

    /// Renews the session if it has expired.
    ///
    /// A failed renewal is only logged; the request still goes out with the
    /// current key and the service's answer decides what happens next.
    async fn ensure_session(&mut self) {
        if self.token_is_valid() {
            return;
        }
        if !self.has_password() {
            debug!("Session expired and no password set, skipping renewal");
            return;
        }
        debug!("Session expired, authenticating");
        if let Err(e) = self.fetch_token().await {
            warn!(error = %e, "Could not renew session before lookup");
        }
    }

    /// Runs a keyed query and returns the raw body.
    async fn query(&mut self, parameter: &str, term: &str) -> Result<String, FetchError> {
        self.ensure_session().await;
        let url = self.request_url(&[(parameter, term), ("s", self.session.key.as_str())])?;
        self.send(&url).await
    }

    /// Marks the session expired after the service rejected it.
    fn check_rejection<V>(&mut self, result: Result<V, FetchError>) -> Result<V, FetchError> {
        if let Err(e) = &result {
            if e.is_auth_failure() {
                info!(reason = %e, "Session rejected by service");
                self.session.expires_at = DateTime::<Utc>::UNIX_EPOCH;
            }
        }
        result
    }
}

#[async_trait]
impl<T: Transport> LookupClient for QrzClient<T> {
    fn token_is_valid(&self) -> bool {
        self.token_is_valid_at(Utc::now())
    }

    #[instrument(skip(self))]
    async fn fetch_token(&mut self) -> Result<(), FetchError> {
        let url = self.request_url(&[
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ])?;

        let result = match self.send(&url).await {
            Ok(body) => response::parse_session_key(&body),
            Err(e) => Err(e),
        };

        match result {
            Ok(key) => {
                self.session = SessionToken::issued_at(key, Utc::now());
                info!(expires_at = %self.session.expires_at, "Session key issued");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Authentication failed");
                // The service rejected the credentials; never resend them.
                if matches!(e, FetchError::Service(_)) {
                    self.password.clear();
                }
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    async fn fetch_callsign(&mut self, term: &str) -> Result<Callsign, FetchError> {
        let parameter = qrz_core::LookupAction::Callsign.query_parameter();
        let result = match self.query(parameter, term).await {
            Ok(body) => response::parse_callsign(&body),
            Err(e) => Err(e),
        };
        self.check_rejection(result)
    }

    #[instrument(skip(self))]
    async fn fetch_dxcc(&mut self, term: &str) -> Result<Dxcc, FetchError> {
        let parameter = qrz_core::LookupAction::Dxcc.query_parameter();
        let result = match self.query(parameter, term).await {
            Ok(body) => response::parse_dxcc(&body),
            Err(e) => Err(e),
        };
        self.check_rejection(result)
    }

    #[instrument(skip(self))]
    async fn fetch_bio(&mut self, term: &str) -> Result<String, FetchError> {
        let parameter = qrz_core::LookupAction::Bio.query_parameter();
        let result = match self.query(parameter, term).await {
            // Session errors arrive as an XML document instead of HTML.
            Ok(body) if response::is_qrz_document(&body) => {
                response::validate_body(&body).map(|_| body)
            }
            other => other,
        };
        self.check_rejection(result)
    }

    fn set_password(&mut self, password: String) {
        self.password = password;
    }

    fn session(&self) -> &SessionToken {
        &self.session
    }
}

// ============================================================================
// Tests
// ============================================================================
