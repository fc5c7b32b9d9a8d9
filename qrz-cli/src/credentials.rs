//! Credential source backed by the config file and the terminal.

use async_trait::async_trait;
use qrz_core::SessionToken;
use qrz_fetch::{CredentialSource, FetchError};
use qrz_store::CredentialStore;
use tracing::{debug, info, warn};

use crate::prompt;

/// Hands out the stored password, prompting for one when none is stored.
pub struct StoreCredentials<'a> {
    store: &'a mut CredentialStore,
}

impl<'a> StoreCredentials<'a> {
    /// Wraps a loaded credential store.
    pub fn new(store: &'a mut CredentialStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CredentialSource for StoreCredentials<'_> {
    async fn password(&mut self) -> Result<String, FetchError> {
        if let Some(password) = self.store.password() {
            debug!("Using stored password");
            return Ok(password);
        }

        let callsign = self.store.callsign().unwrap_or_default().to_string();
        let password =
            prompt::prompt_password(&callsign).map_err(|e| FetchError::Credentials(e.to_string()))?;

        self.store
            .set_password(&password)
            .map_err(|e| FetchError::Credentials(e.to_string()))?;
        self.store
            .save()
            .await
            .map_err(|e| FetchError::Credentials(e.to_string()))?;

        Ok(password)
    }

    async fn session_refreshed(&mut self, session: &SessionToken) -> Result<(), FetchError> {
        self.store.set_session(session);
        self.store
            .save()
            .await
            .map_err(|e| FetchError::Credentials(e.to_string()))
    }

    async fn login_failed(&mut self, error: &FetchError) {
        if matches!(error, FetchError::Service(_)) && self.store.has_password() {
            info!("Login rejected, forgetting stored password");
            self.store.clear_password();
            if let Err(e) = self.store.save().await {
                warn!(error = %e, "Could not save the config file");
            }
        }
    }
}
