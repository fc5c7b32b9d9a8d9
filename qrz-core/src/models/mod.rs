//! Domain models for the QRZ client.
//!
//! ## Submodules
//!
//! - [`callsign`] - Callsign record and its field table
//! - [`dxcc`] - DXCC entity record and its field table
//! - [`lookup`] - Lookup actions and the tagged record union
//! - [`session`] - Session token lifetime

mod callsign;
mod dxcc;
mod lookup;
mod session;

// Re-export everything at the models level
pub use callsign::{CALLSIGN_FIELDS, Callsign};
pub use dxcc::{DXCC_FIELDS, Dxcc};
pub use lookup::{BioRecord, LookupAction, LookupRecord};
pub use session::{SESSION_LIFETIME_HOURS, SessionToken};

/// Reads one named field of a record as text.
pub type FieldGetter<T> = fn(&T) -> String;
