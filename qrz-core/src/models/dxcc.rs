//! DXCC entity record.

use serde::{Deserialize, Serialize};

use super::FieldGetter;

/// A DXCC entity as returned by the lookup service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dxcc {
    /// DXCC entity number.
    pub dxcc: String,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    pub cc: String,
    /// Three-letter country code (ISO 3166-1 alpha-3).
    pub ccc: String,
    /// Long name.
    pub name: String,
    /// Two-letter continent designator.
    pub continent: String,
    /// ITU zone.
    pub ituzone: String,
    /// CQ zone.
    pub cqzone: String,
    /// UTC timezone offset (`+/-HHMM`).
    pub timezone: String,
    /// Latitude (approximate).
    pub lat: String,
    /// Longitude (approximate).
    pub lon: String,
    /// Special notes and exceptions.
    pub notes: String,
}

impl Dxcc {
    /// Returns `(wire name, value)` pairs for every field, in wire order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        DXCC_FIELDS
            .iter()
            .map(|(name, get)| (*name, get(self)))
            .collect()
    }
}

/// Wire names and getters for every DXCC field.
pub const DXCC_FIELDS: &[(&str, FieldGetter<Dxcc>)] = &[
    ("dxcc", |d| d.dxcc.clone()),
    ("cc", |d| d.cc.clone()),
    ("ccc", |d| d.ccc.clone()),
    ("name", |d| d.name.clone()),
    ("continent", |d| d.continent.clone()),
    ("ituzone", |d| d.ituzone.clone()),
    ("cqzone", |d| d.cqzone.clone()),
    ("timezone", |d| d.timezone.clone()),
    ("lat", |d| d.lat.clone()),
    ("lon", |d| d.lon.clone()),
    ("notes", |d| d.notes.clone()),
];
