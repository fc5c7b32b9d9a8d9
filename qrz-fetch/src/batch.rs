//! Batch fetch orchestrator.
//!
//! Walks a sorted set of query terms with an explicit cursor. A term is
//! resolved either by a fetched record or by a recorded error; the cursor
//! only advances once the term is resolved. An authentication failure keeps
//! the cursor in place, renews the session and retries the same term until
//! the retry budget runs out.

use std::collections::BTreeSet;
use std::fmt;

use async_trait::async_trait;
use qrz_core::{LookupAction, LookupRecord, SessionToken};
use tracing::{debug, info, instrument, warn};

use crate::error::FetchError;
use crate::lookup::LookupClient;
use crate::retry::{MAX_AUTH_FAILURES, RetryBudget};

// ============================================================================
// Credentials & Progress
// ============================================================================

/// Supplies credentials when the orchestrator has to re-authenticate.
#[async_trait]
pub trait CredentialSource: Send {
    /// Returns the password to authenticate with (stored or prompted).
    async fn password(&mut self) -> Result<String, FetchError>;

    /// Called after a new session key was obtained, to persist it.
    async fn session_refreshed(&mut self, session: &SessionToken) -> Result<(), FetchError>;

    /// Called when authenticating with the last password failed.
    async fn login_failed(&mut self, _error: &FetchError) {}
}

/// Observer for batch progress. Every hook defaults to a no-op.
pub trait BatchProgress {
    /// Called once before the first term.
    fn on_start(&mut self, _total: usize) {}

    /// Called before each lookup attempt.
    fn on_fetch(&mut self, _term: &str, _index: usize, _total: usize) {}

    /// Called before credentials are requested for a retry.
    fn on_reauthenticate(&mut self, _term: &str, _attempt: u32) {}

    /// Called once after the last term.
    fn on_finish(&mut self) {}
}

/// A progress observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl BatchProgress for NoProgress {}

impl<P: BatchProgress + ?Sized> BatchProgress for &mut P {
    fn on_start(&mut self, total: usize) {
        (**self).on_start(total);
    }

    fn on_fetch(&mut self, term: &str, index: usize, total: usize) {
        (**self).on_fetch(term, index, total);
    }

    fn on_reauthenticate(&mut self, term: &str, attempt: u32) {
        (**self).on_reauthenticate(term, attempt);
    }

    fn on_finish(&mut self) {
        (**self).on_finish();
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// A term that could not be resolved to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermError {
    /// The query term.
    pub term: String,
    /// Error text.
    pub message: String,
}

impl TermError {
    /// Creates a term error.
    pub fn new(term: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.term, self.message)
    }
}

/// Records and errors of a batch, both in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Fetched records.
    pub records: Vec<LookupRecord>,
    /// Terms that failed.
    pub errors: Vec<TermError>,
}

impl BatchOutcome {
    /// Returns the number of resolved terms.
    pub fn total(&self) -> usize {
        self.records.len() + self.errors.len()
    }

    /// Returns true if nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns true if there were terms and none succeeded.
    pub fn all_failed(&self) -> bool {
        self.records.is_empty() && !self.errors.is_empty()
    }
}

// ============================================================================
// Term Normalization
// ============================================================================

/// Trims, deduplicates and sorts query terms.
///
/// Empty terms are dropped. Callsign and bio terms are upper-cased since
/// callsigns are case-insensitive.
pub fn normalize_terms<I, S>(action: LookupAction, terms: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|term| term.as_ref().trim().to_string())
        .filter(|term| !term.is_empty())
        .map(|term| {
            if action.takes_callsigns() {
                term.to_uppercase()
            } else {
                term
            }
        })
        .collect()
}

// ============================================================================
// Batch Fetcher
// ============================================================================

/// Fetches one record per term, re-authenticating as needed.
pub struct BatchFetcher<'a, C: LookupClient, S: CredentialSource> {
    client: &'a mut C,
    credentials: &'a mut S,
    progress: Box<dyn BatchProgress + 'a>,
    max_auth_failures: u32,
}

impl<'a, C: LookupClient, S: CredentialSource> BatchFetcher<'a, C, S> {
    /// Creates a fetcher with no progress reporting.
    pub fn new(client: &'a mut C, credentials: &'a mut S) -> Self {
        Self {
            client,
            credentials,
            progress: Box::new(NoProgress),
            max_auth_failures: MAX_AUTH_FAILURES,
        }
    }

    /// Reports progress to the given observer.
    #[must_use]
    pub fn with_progress(mut self, progress: impl BatchProgress + 'a) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Overrides the re-authentication cap per term.
    #[must_use]
    pub fn with_max_auth_failures(mut self, max: u32) -> Self {
        self.max_auth_failures = max;
        self
    }

    /// Resolves every term in set order.
    #[instrument(skip(self, terms), fields(action = %action, terms = terms.len()))]
    pub async fn run(&mut self, action: LookupAction, terms: &BTreeSet<String>) -> BatchOutcome {
        let terms: Vec<&str> = terms.iter().map(String::as_str).collect();
        let total = terms.len();
        let mut outcome = BatchOutcome::default();
        let mut budget = RetryBudget::new(self.max_auth_failures);
        let mut cursor = 0;

        self.progress.on_start(total);

        while let Some(&term) = terms.get(cursor) {
            self.progress.on_fetch(term, cursor, total);

            let resolved = match self.client.lookup(action, term).await {
                Ok(record) => {
                    debug!(term, "Lookup succeeded");
                    outcome.records.push(record);
                    true
                }
                Err(FetchError::AuthenticationFailed(text)) if budget.is_exhausted() => {
                    warn!(
                        term,
                        failures = budget.failures(),
                        "Giving up after repeated authentication failures"
                    );
                    outcome
                        .errors
                        .push(TermError::new(term, FetchError::Service(text).to_string()));
                    true
                }
                Err(FetchError::AuthenticationFailed(text)) => {
                    let attempt = budget.record_failure();
                    info!(term, attempt, reason = %text, "Re-authenticating");
                    self.progress.on_reauthenticate(term, attempt);
                    match self.reauthenticate().await {
                        Ok(()) => false,
                        Err(e) => {
                            outcome.errors.push(TermError::new(term, e.to_string()));
                            true
                        }
                    }
                }
                Err(e) => {
                    debug!(term, error = %e, "Lookup failed");
                    outcome.errors.push(TermError::new(term, e.to_string()));
                    true
                }
            };

            if resolved {
                cursor += 1;
                budget.reset();
            }
        }

        self.progress.on_finish();
        outcome
    }

    /// Obtains a password and renews the session.
    ///
    /// Only a missing password is an error here. A failed renewal shows up
    /// as another authentication failure on the retried lookup.
    async fn reauthenticate(&mut self) -> Result<(), FetchError> {
        let password = self.credentials.password().await?;
        self.client.set_password(password);

        if let Err(e) = self.client.fetch_token().await {
            warn!(error = %e, "Re-authentication failed");
            self.credentials.login_failed(&e).await;
            return Ok(());
        }

        if self.client.token_is_valid() {
            if let Err(e) = self.credentials.session_refreshed(self.client.session()).await {
                warn!(error = %e, "Could not persist session");
            }
        }
        Ok(())
    }
}
