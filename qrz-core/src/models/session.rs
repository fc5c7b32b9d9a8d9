//! Session token and lifetime rules.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Hours a freshly issued session key is assumed to stay valid.
///
/// The service does not report an expiration with the key, so the client
/// assigns this lifetime itself when a key is issued.
pub const SESSION_LIFETIME_HOURS: i64 = 24;

/// A session key together with the instant the client stops trusting it.
///
/// The key is valid iff `expires_at > now`. The service may still reject a
/// key the client believes is valid; that surfaces as an authentication
/// failure on the next lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Session key returned by the authentication endpoint.
    pub key: String,
    /// Client-side expiration instant.
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// Creates a token with an explicit expiration.
    pub fn new(key: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            expires_at,
        }
    }

    /// Creates a token issued at `now`, expiring after the session lifetime.
    pub fn issued_at(key: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(key, now + Self::lifetime())
    }

    /// Returns the lifetime assigned to newly issued keys.
    pub fn lifetime() -> Duration {
        Duration::hours(SESSION_LIFETIME_HOURS)
    }

    /// Returns true if the token is still valid at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Returns true if the token is valid right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

impl Default for SessionToken {
    /// An empty key that expired at the Unix epoch.
    fn default() -> Self {
        Self {
            key: String::new(),
            expires_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}
