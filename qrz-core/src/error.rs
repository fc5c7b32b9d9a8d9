//! Core error types for the QRZ client.

use thiserror::Error;

/// Core error type for model operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Unknown lookup action name.
    #[error("Unknown action: {0}. Valid options: callsign, bio, dxcc")]
    UnknownAction(String),

    /// Invalid data in a record.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
