//! The lookup seam between the batch orchestrator and the session client.

use async_trait::async_trait;
use qrz_core::{BioRecord, Callsign, Dxcc, LookupAction, LookupRecord, SessionToken};

use crate::error::FetchError;

/// Operations the batch orchestrator needs from a session client.
///
/// Implemented by [`crate::QrzClient`]; tests substitute scripted clients.
#[async_trait]
pub trait LookupClient: Send {
    /// Returns true if the current session key is believed valid.
    fn token_is_valid(&self) -> bool;

    /// Requests a new session key with the stored username and password.
    ///
    /// On failure the current token is left untouched.
    async fn fetch_token(&mut self) -> Result<(), FetchError>;

    /// Fetches a callsign record.
    async fn fetch_callsign(&mut self, term: &str) -> Result<Callsign, FetchError>;

    /// Fetches a DXCC entity record.
    async fn fetch_dxcc(&mut self, term: &str) -> Result<Dxcc, FetchError>;

    /// Fetches the raw biography body for a callsign.
    async fn fetch_bio(&mut self, term: &str) -> Result<String, FetchError>;

    /// Replaces the password used for the next authentication.
    fn set_password(&mut self, password: String);

    /// Returns the current session token.
    fn session(&self) -> &SessionToken;

    /// Fetches the record `action` names for `term`.
    async fn lookup(
        &mut self,
        action: LookupAction,
        term: &str,
    ) -> Result<LookupRecord, FetchError> {
        let record = match action {
            LookupAction::Callsign => self.fetch_callsign(term).await?.into(),
            LookupAction::Dxcc => self.fetch_dxcc(term).await?.into(),
            LookupAction::Bio => BioRecord::new(term, self.fetch_bio(term).await?).into(),
        };
        Ok(record)
    }
}
