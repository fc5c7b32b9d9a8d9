//! Persisted callsign, password and session.

use chrono::{DateTime, Utc};
use qrz_core::SessionToken;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::crypto::PasswordCipher;
use crate::error::StoreError;
use crate::persistence::{CONFIG_FILE_NAME, default_config_dir, load_json, save_json};

// ============================================================================
// Stored Credentials
// ============================================================================

/// On-disk contents of the credential file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredCredentials {
    /// The user's callsign (QRZ username).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsign: Option<String>,
    /// Password encrypted under the callsign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Last session key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_key: Option<String>,
    /// Client-side expiration of the session key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_expiration: Option<DateTime<Utc>>,
}

// ============================================================================
// Credential Store
// ============================================================================

/// Credential file backed store.
///
/// Mutations only touch memory; call [`CredentialStore::save`] to persist.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    data: StoredCredentials,
}

impl CredentialStore {
    /// Creates an empty store that will save to `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: StoredCredentials::default(),
        }
    }

    /// Opens the credential file in `dir`.
    ///
    /// A missing file yields an empty store; an unreadable one is an error.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);

        let data = match load_json(&path).await {
            Ok(data) => {
                info!(path = %path.display(), "Loaded credentials");
                data
            }
            Err(e) if e.is_not_found() => {
                debug!(path = %path.display(), "Credential file not found, starting empty");
                StoredCredentials::default()
            }
            Err(e) => return Err(e),
        };

        Ok(Self { path, data })
    }

    /// Opens the credential file in the default config directory.
    pub async fn open_default() -> Result<Self, StoreError> {
        Self::open(default_config_dir()?).await
    }

    /// Returns the path of the credential file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the raw stored contents.
    pub fn stored(&self) -> &StoredCredentials {
        &self.data
    }

    /// Writes the credential file.
    pub async fn save(&self) -> Result<(), StoreError> {
        save_json(&self.path, &self.data).await?;
        debug!(path = %self.path.display(), "Credentials saved");
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Callsign
    // ------------------------------------------------------------------------

    /// Returns the stored callsign.
    pub fn callsign(&self) -> Option<&str> {
        self.data.callsign.as_deref().filter(|c| !c.is_empty())
    }

    /// Returns true if a callsign is stored.
    pub fn has_callsign(&self) -> bool {
        self.callsign().is_some()
    }

    /// Stores a callsign, upper-cased.
    ///
    /// Switching to another callsign clears the password and session, which
    /// belong to the previous account.
    pub fn set_callsign(&mut self, callsign: &str) {
        let callsign = callsign.trim().to_uppercase();
        if self.callsign() != Some(callsign.as_str()) {
            if self.has_callsign() {
                info!(callsign = %callsign, "Callsign changed, clearing stored credentials");
            }
            self.clear_credentials();
        }
        self.data.callsign = Some(callsign);
    }

    // ------------------------------------------------------------------------
    // Password
    // ------------------------------------------------------------------------

    /// Returns the decrypted password.
    ///
    /// A password that cannot be decrypted is treated as absent.
    pub fn password(&self) -> Option<String> {
        let encrypted = self.data.password.as_deref()?;
        let callsign = self.callsign()?;

        match PasswordCipher::for_callsign(callsign).and_then(|c| c.decrypt(encrypted)) {
            Ok(password) => Some(password),
            Err(e) => {
                warn!(error = %e, "Stored password could not be decrypted");
                None
            }
        }
    }

    /// Returns true if an encrypted password is stored.
    pub fn has_password(&self) -> bool {
        self.data.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Encrypts and stores a password under the current callsign.
    pub fn set_password(&mut self, password: &str) -> Result<(), StoreError> {
        let callsign = self
            .callsign()
            .ok_or_else(|| StoreError::Config("A callsign is required to store a password".to_string()))?;

        let encrypted = PasswordCipher::for_callsign(callsign)?.encrypt(password)?;
        self.data.password = Some(encrypted);
        Ok(())
    }

    /// Forgets the stored password.
    pub fn clear_password(&mut self) {
        self.data.password = None;
    }

    // ------------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------------

    /// Returns the stored session key.
    pub fn session_key(&self) -> Option<&str> {
        self.data.session_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Returns true if a session key is stored.
    pub fn has_session_key(&self) -> bool {
        self.session_key().is_some()
    }

    /// Stores a session key.
    pub fn set_session_key(&mut self, key: impl Into<String>) {
        self.data.session_key = Some(key.into());
    }

    /// Returns the stored session expiration.
    pub fn session_expiration(&self) -> Option<DateTime<Utc>> {
        self.data.session_expiration
    }

    /// Returns true if a session expiration is stored.
    pub fn has_session_expiration(&self) -> bool {
        self.data.session_expiration.is_some()
    }

    /// Stores a session expiration.
    pub fn set_session_expiration(&mut self, expires_at: DateTime<Utc>) {
        self.data.session_expiration = Some(expires_at);
    }

    /// Returns the stored session, or an expired empty one.
    pub fn session(&self) -> SessionToken {
        match (self.session_key(), self.session_expiration()) {
            (Some(key), Some(expires_at)) => SessionToken::new(key, expires_at),
            _ => SessionToken::default(),
        }
    }

    /// Stores a session.
    pub fn set_session(&mut self, session: &SessionToken) {
        self.set_session_key(session.key.clone());
        self.set_session_expiration(session.expires_at);
    }

    /// Forgets the password and session, keeping the callsign.
    pub fn clear_credentials(&mut self) {
        self.data.password = None;
        self.data.session_key = None;
        self.data.session_expiration = None;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::open(temp_dir.path()).await.unwrap();

        assert!(!store.has_callsign());
        assert!(!store.has_password());
        assert!(!store.session().is_valid());
        assert_eq!(store.path(), temp_dir.path().join("qrz.json"));
    }

    #[tokio::test]
    async fn test_open_corrupt_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        tokio::fs::write(temp_dir.path().join("qrz.json"), "garbage").await.unwrap();

        assert!(CredentialStore::open(temp_dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_save_and_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let session = SessionToken::issued_at("abc123", Utc::now());

        let mut store = CredentialStore::open(temp_dir.path()).await.unwrap();
        store.set_callsign("w1aw");
        store.set_password("hunter2").unwrap();
        store.set_session(&session);
        store.save().await.unwrap();

        let reopened = CredentialStore::open(temp_dir.path()).await.unwrap();
        assert_eq!(reopened.callsign(), Some("W1AW"));
        assert_eq!(reopened.password().as_deref(), Some("hunter2"));
        assert_eq!(reopened.session(), session);
        assert!(reopened.session().is_valid());
    }

    #[tokio::test]
    async fn test_password_is_not_stored_in_plaintext() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CredentialStore::open(temp_dir.path()).await.unwrap();
        store.set_callsign("W1AW");
        store.set_password("hunter2").unwrap();
        store.save().await.unwrap();

        let content = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(content.contains("W1AW"));
        assert!(!content.contains("hunter2"));
    }

    #[test]
    fn test_changing_callsign_clears_password_and_session() {
        let mut store = CredentialStore::new(PathBuf::from("qrz.json"));
        store.set_callsign("W1AW");
        store.set_password("hunter2").unwrap();
        store.set_session(&SessionToken::issued_at("abc", Utc::now()));

        store.set_callsign("w1aw");
        assert!(store.has_password());
        assert!(store.has_session_key());

        store.set_callsign("W5YI");
        assert_eq!(store.callsign(), Some("W5YI"));
        assert!(!store.has_password());
        assert!(!store.has_session_key());
        assert!(!store.has_session_expiration());
    }

    #[test]
    fn test_password_requires_callsign() {
        let mut store = CredentialStore::new(PathBuf::from("qrz.json"));
        assert!(matches!(store.set_password("pw"), Err(StoreError::Config(_))));
    }

    #[test]
    fn test_undecryptable_password_is_absent() {
        let mut store = CredentialStore::new(PathBuf::from("qrz.json"));
        store.set_callsign("W1AW");
        store.data.password = Some(
            PasswordCipher::for_callsign("W5YI")
                .unwrap()
                .encrypt("pw")
                .unwrap(),
        );

        assert!(store.has_password());
        assert_eq!(store.password(), None);
    }

    #[test]
    fn test_session_requires_key_and_expiration() {
        let mut store = CredentialStore::new(PathBuf::from("qrz.json"));
        store.set_session_key("abc");
        assert_eq!(store.session(), SessionToken::default());

        let expires_at = Utc::now() + Duration::hours(1);
        store.set_session_expiration(expires_at);
        assert_eq!(store.session(), SessionToken::new("abc", expires_at));
    }

    #[test]
    fn test_clear_credentials_keeps_callsign() {
        let mut store = CredentialStore::new(PathBuf::from("qrz.json"));
        store.set_callsign("W1AW");
        store.set_password("pw").unwrap();
        store.set_session(&SessionToken::issued_at("abc", Utc::now()));

        store.clear_credentials();

        assert_eq!(store.callsign(), Some("W1AW"));
        assert!(!store.has_password());
        assert!(!store.session().is_valid());
    }
}
