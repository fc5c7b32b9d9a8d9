//! Lookup actions and the records they produce.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Callsign, Dxcc};
use crate::error::CoreError;

// ============================================================================
// Lookup Action
// ============================================================================

/// The kind of record a batch lookup fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupAction {
    /// Callsign record lookup.
    #[default]
    Callsign,
    /// Raw biography lookup.
    Bio,
    /// DXCC entity lookup.
    Dxcc,
}

impl LookupAction {
    /// All actions, in display order.
    pub const ALL: [LookupAction; 3] = [Self::Callsign, Self::Bio, Self::Dxcc];

    /// Returns the query-string parameter carrying the search term.
    pub fn query_parameter(&self) -> &'static str {
        match self {
            Self::Callsign => "callsign",
            Self::Bio => "html",
            Self::Dxcc => "dxcc",
        }
    }

    /// Returns the CLI name for this action.
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Callsign => "callsign",
            Self::Bio => "bio",
            Self::Dxcc => "dxcc",
        }
    }

    /// Returns true if terms for this action are callsigns.
    ///
    /// Callsigns are case-insensitive, DXCC terms may be entity numbers or
    /// free-form prefixes and are passed through unchanged.
    pub fn takes_callsigns(&self) -> bool {
        matches!(self, Self::Callsign | Self::Bio)
    }
}

impl fmt::Display for LookupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for LookupAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "callsign" | "call" => Ok(Self::Callsign),
            "bio" | "html" => Ok(Self::Bio),
            "dxcc" => Ok(Self::Dxcc),
            _ => Err(CoreError::UnknownAction(s.to_string())),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// Raw biography body for a callsign.
///
/// The service returns the biography as opaque HTML; it is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioRecord {
    /// The callsign the biography belongs to.
    pub call: String,
    /// Raw response body.
    pub html: String,
}

impl BioRecord {
    /// Creates a biography record.
    pub fn new(call: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            call: call.into(),
            html: html.into(),
        }
    }
}

/// A fetched record of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LookupRecord {
    /// A callsign record.
    Callsign(Callsign),
    /// A biography body.
    Bio(BioRecord),
    /// A DXCC entity.
    Dxcc(Dxcc),
}

impl LookupRecord {
    /// Returns the action that produces this kind of record.
    pub fn action(&self) -> LookupAction {
        match self {
            Self::Callsign(_) => LookupAction::Callsign,
            Self::Bio(_) => LookupAction::Bio,
            Self::Dxcc(_) => LookupAction::Dxcc,
        }
    }

    /// Returns the record's primary identifier.
    pub fn key(&self) -> &str {
        match self {
            Self::Callsign(c) => &c.call,
            Self::Bio(b) => &b.call,
            Self::Dxcc(d) => &d.dxcc,
        }
    }

    /// Returns the callsign record, if this is one.
    pub fn as_callsign(&self) -> Option<&Callsign> {
        match self {
            Self::Callsign(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the biography record, if this is one.
    pub fn as_bio(&self) -> Option<&BioRecord> {
        match self {
            Self::Bio(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the DXCC record, if this is one.
    pub fn as_dxcc(&self) -> Option<&Dxcc> {
        match self {
            Self::Dxcc(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Callsign> for LookupRecord {
    fn from(value: Callsign) -> Self {
        Self::Callsign(value)
    }
}

impl From<BioRecord> for LookupRecord {
    fn from(value: BioRecord) -> Self {
        Self::Bio(value)
    }
}

impl From<Dxcc> for LookupRecord {
    fn from(value: Dxcc) -> Self {
        Self::Dxcc(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_str() {
        assert_eq!("callsign".parse::<LookupAction>().unwrap(), LookupAction::Callsign);
        assert_eq!("BIO".parse::<LookupAction>().unwrap(), LookupAction::Bio);
        assert_eq!("Dxcc".parse::<LookupAction>().unwrap(), LookupAction::Dxcc);
        assert_eq!("".parse::<LookupAction>().unwrap(), LookupAction::Callsign);
    }

    #[test]
    fn test_action_from_str_invalid() {
        assert!(matches!(
            "qsl".parse::<LookupAction>(),
            Err(CoreError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_query_parameters() {
        assert_eq!(LookupAction::Callsign.query_parameter(), "callsign");
        assert_eq!(LookupAction::Bio.query_parameter(), "html");
        assert_eq!(LookupAction::Dxcc.query_parameter(), "dxcc");
    }

    #[test]
    fn test_record_accessors() {
        let record = LookupRecord::from(Callsign::new("W1AW"));
        assert_eq!(record.action(), LookupAction::Callsign);
        assert_eq!(record.key(), "W1AW");
        assert!(record.as_callsign().is_some());
        assert!(record.as_dxcc().is_none());

        let record = LookupRecord::from(BioRecord::new("W5YI", "<p>hi</p>"));
        assert_eq!(record.action(), LookupAction::Bio);
        assert_eq!(record.as_bio().map(|b| b.html.as_str()), Some("<p>hi</p>"));
    }
}
