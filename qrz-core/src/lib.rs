// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # QRZ Core
//!
//! Core types for the QRZ.com lookup client.
//!
//! This crate provides the data shared by every other crate in the
//! workspace:
//!
//! - Record models returned by the lookup service
//! - The session token and its lifetime rules
//! - Error types
//!
//! ## Key Types
//!
//! ### Records
//! - [`Callsign`] - A licensed operator's callsign record
//! - [`Dxcc`] - A DXCC entity record
//! - [`BioRecord`] - Raw biography body for a callsign
//! - [`LookupRecord`] - Any of the above, tagged by kind
//!
//! ### Lookups & Sessions
//! - [`LookupAction`] - Which kind of record a batch fetches
//! - [`SessionToken`] - Session key with its client-side expiration

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Records
    BioRecord,
    CALLSIGN_FIELDS,
    Callsign,
    DXCC_FIELDS,
    Dxcc,
    FieldGetter,
    LookupRecord,
    // Lookups & sessions
    LookupAction,
    SESSION_LIFETIME_HOURS,
    SessionToken,
};
