//! Response validation for QRZ XML documents.
//!
//! Every response is a `<QRZDatabase>` document with a `<Session>` section.
//! The session section either carries a key or an error text; two error
//! texts mean the session key must be renewed, any other text is a plain
//! service error for the current query.

use qrz_core::{Callsign, Dxcc};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::FetchError;

/// Root element name of every service document.
pub const ROOT_ELEMENT: &str = "QRZDatabase";

/// Error text for a session key that outlived its server-side lifetime.
pub const SESSION_TIMEOUT: &str = "Session Timeout";

/// Error text for a session key the service does not recognize.
pub const INVALID_SESSION_KEY: &str = "Invalid session key";

// ============================================================================
// Document Types
// ============================================================================

/// A parsed `<QRZDatabase>` document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QrzDocument {
    /// Session status section.
    #[serde(rename = "Session")]
    pub session: Option<SessionInfo>,
    /// Callsign record, present on callsign lookups.
    #[serde(rename = "Callsign")]
    pub callsign: Option<Callsign>,
    /// DXCC record, present on DXCC lookups.
    #[serde(rename = "DXCC")]
    pub dxcc: Option<Dxcc>,
}

/// The `<Session>` section of a document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionInfo {
    /// Session key, present when the session is usable.
    #[serde(rename = "Key")]
    pub key: Option<String>,
    /// Lookups performed by this user in the current 24 hour period.
    #[serde(rename = "Count")]
    pub count: Option<String>,
    /// Subscription expiration date.
    #[serde(rename = "SubExp")]
    pub sub_exp: Option<String>,
    /// Server time.
    #[serde(rename = "GMTime")]
    pub gm_time: Option<String>,
    /// Informational remark.
    #[serde(rename = "Remark")]
    pub remark: Option<String>,
    /// Notice for the user, such as a subscription warning.
    #[serde(rename = "Message")]
    pub message: Option<String>,
    /// Error text.
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl SessionInfo {
    /// Returns the session key, if non-empty.
    pub fn key(&self) -> Option<&str> {
        non_empty(self.key.as_deref())
    }

    /// Returns the error text, if non-empty.
    pub fn error(&self) -> Option<&str> {
        non_empty(self.error.as_deref())
    }

    fn log(&self) {
        debug!(
            count = self.count.as_deref().unwrap_or_default(),
            sub_exp = self.sub_exp.as_deref().unwrap_or_default(),
            gm_time = self.gm_time.as_deref().unwrap_or_default(),
            remark = self.remark.as_deref().unwrap_or_default(),
            "Session status"
        );
        if let Some(message) = non_empty(self.message.as_deref()) {
            info!(message = %message, "Message from QRZ");
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ============================================================================
// Parsing & Validation
// ============================================================================

/// Returns the local name of the document's root element.
fn root_element_name(body: &str) -> Result<String, FetchError> {
    let mut reader = Reader::from_str(body);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Text(text)) if !text.iter().all(u8::is_ascii_whitespace) => {
                return Err(FetchError::InvalidResponse(
                    "Text before root element".to_string(),
                ));
            }
            Ok(Event::Eof) => {
                return Err(FetchError::InvalidResponse("Empty document".to_string()));
            }
            Ok(_) => {}
            Err(e) => {
                return Err(FetchError::InvalidResponse(format!("XML parse error: {e}")));
            }
        }
    }
}

/// Returns true if the body is a `<QRZDatabase>` document.
pub fn is_qrz_document(body: &str) -> bool {
    matches!(root_element_name(body), Ok(name) if name == ROOT_ELEMENT)
}

/// Parses a response body into a document.
///
/// Fails if the body is not XML or its root is not `<QRZDatabase>`.
pub fn parse_document(body: &str) -> Result<QrzDocument, FetchError> {
    let root = root_element_name(body)?;
    if root != ROOT_ELEMENT {
        return Err(FetchError::InvalidResponse(format!(
            "Unexpected root element <{root}>"
        )));
    }

    quick_xml::de::from_str(body)
        .map_err(|e| FetchError::InvalidResponse(format!("XML parse error: {e}")))
}

/// Maps a session error text to an error.
pub fn classify_session_error(text: &str) -> FetchError {
    let text = text.trim();
    if text == SESSION_TIMEOUT || text == INVALID_SESSION_KEY {
        FetchError::AuthenticationFailed(text.to_string())
    } else {
        FetchError::Service(text.to_string())
    }
}

/// Checks the session section of a document.
///
/// Returns the section when it carries no error.
pub fn validate(document: &QrzDocument) -> Result<&SessionInfo, FetchError> {
    let session = document
        .session
        .as_ref()
        .ok_or_else(|| FetchError::InvalidResponse("Session element not found".to_string()))?;

    session.log();

    match session.error() {
        Some(text) => Err(classify_session_error(text)),
        None => Ok(session),
    }
}

/// Parses and validates a response body.
pub fn validate_body(body: &str) -> Result<QrzDocument, FetchError> {
    let document = parse_document(body)?;
    validate(&document)?;
    Ok(document)
}

/// Extracts the session key from an authentication response.
pub fn parse_session_key(body: &str) -> Result<String, FetchError> {
    let document = parse_document(body)?;
    let session = validate(&document)?;
    session
        .key()
        .map(str::to_string)
        .ok_or_else(|| FetchError::InvalidResponse("Session key not found".to_string()))
}

/// Extracts the callsign record from a lookup response.
pub fn parse_callsign(body: &str) -> Result<Callsign, FetchError> {
    validate_body(body)?
        .callsign
        .ok_or_else(|| FetchError::InvalidResponse("No Callsign element".to_string()))
}

/// Extracts the DXCC record from a lookup response.
pub fn parse_dxcc(body: &str) -> Result<Dxcc, FetchError> {
    validate_body(body)?
        .dxcc
        .ok_or_else(|| FetchError::InvalidResponse("No DXCC element".to_string()))
}

// ============================================================================
// Tests
// ============================================================================
