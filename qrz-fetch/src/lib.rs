// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # QRZ Fetch
//!
//! Session handling and lookups against the QRZ.com XML service.
//!
//! ## Session Client
//!
//! - [`ClientConfig`] - Immutable endpoint, API version, agent and timeout
//! - [`Transport`] / [`HttpTransport`] - GET requests with a domain allowlist
//! - [`response`] - `<QRZDatabase>` parsing and session error classification
//! - [`QrzClient`] - Owns the session token and performs single lookups
//!
//! ## Batch Lookups
//!
//! - [`LookupClient`] - The operations the orchestrator needs from a client
//! - [`BatchFetcher`] - Resolves a sorted set of terms, re-authenticating
//!   on session failures up to [`MAX_AUTH_FAILURES`] times per term
//! - [`CredentialSource`] - Supplies passwords and persists new sessions
//! - [`BatchProgress`] - Progress hooks
//!
//! ## Example
//!
//! ```ignore
//! use qrz_core::LookupAction;
//! use qrz_fetch::{BatchFetcher, ClientConfig, QrzClient, normalize_terms};
//!
//! let mut client = QrzClient::new(ClientConfig::default(), "W1AW", password)?;
//! let terms = normalize_terms(LookupAction::Callsign, ["w1aw", "w5yi"]);
//!
//! let outcome = BatchFetcher::new(&mut client, &mut credentials)
//!     .run(LookupAction::Callsign, &terms)
//!     .await;
//! ```

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod lookup;
pub mod response;
pub mod retry;
pub mod transport;

#[cfg(test)]
mod fixtures;

// Errors
pub use error::FetchError;

// Session client
pub use client::QrzClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_AGENT, DEFAULT_BASE_URL};
pub use http::HttpTransport;
pub use transport::{Transport, TransportResponse};

// Batch lookups
pub use batch::{
    BatchFetcher, BatchOutcome, BatchProgress, CredentialSource, NoProgress, TermError,
    normalize_terms,
};
pub use lookup::LookupClient;
pub use retry::{MAX_AUTH_FAILURES, RetryBudget};
