//! JSON output.

use anyhow::Result;
use serde::Serialize;

/// Formats records as a pretty JSON array.
///
/// Records serialize with their wire field names, so integer fields stay
/// numbers.
pub fn format_records<T: Serialize>(records: &[&T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
