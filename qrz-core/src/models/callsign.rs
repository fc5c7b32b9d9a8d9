//! Callsign record.
//!
//! Field names on the wire are the tag names QRZ uses inside the
//! `<Callsign>` element. Serde renames bind them to Rust field names, so the
//! same struct parses service responses and renders JSON/XML output.

use serde::{Deserialize, Deserializer, Serialize};

use super::FieldGetter;

/// A callsign record as returned by the lookup service.
///
/// Every field is optional on the wire; missing text fields are empty and
/// missing numeric fields are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Callsign {
    /// The callsign itself.
    pub call: String,
    /// Cross reference: the query callsign that returned this record.
    pub xref: String,
    /// Other callsigns that resolve to this record.
    pub aliases: String,
    /// DXCC entity ID (country code) for the callsign.
    pub dxcc: String,
    /// First name.
    pub fname: String,
    /// Last name.
    pub name: String,
    /// Address line 1 (house number and street).
    pub addr1: String,
    /// Address line 2 (city).
    pub addr2: String,
    /// State (USA only).
    pub state: String,
    /// Zip/postal code.
    pub zip: String,
    /// Country name for the QSL mailing address.
    pub country: String,
    /// DXCC entity code for the mailing address country.
    pub ccode: String,
    /// Latitude of the address (signed decimal).
    pub lat: String,
    /// Longitude of the address (signed decimal).
    pub lon: String,
    /// Grid locator.
    pub grid: String,
    /// County name (USA).
    pub county: String,
    /// FIPS county identifier (USA).
    pub fips: String,
    /// DXCC country name of the callsign.
    pub land: String,
    /// License effective date (USA).
    pub efdate: String,
    /// License expiration date (USA).
    pub expdate: String,
    /// Previous callsign.
    #[serde(rename = "p_call")]
    pub previous_call: String,
    /// License class.
    #[serde(rename = "class")]
    pub license_class: String,
    /// License type codes (USA).
    pub codes: String,
    /// QSL manager info.
    pub qslmgr: String,
    /// Email address.
    pub email: String,
    /// Web page address.
    pub url: String,
    /// QRZ web page views.
    #[serde(deserialize_with = "lenient_int")]
    pub u_views: i64,
    /// Approximate length of the bio HTML in bytes.
    #[serde(deserialize_with = "lenient_int")]
    pub bio: i64,
    /// Date of the last bio update.
    pub biodate: String,
    /// Full URL of the primary image.
    pub image: String,
    /// Image dimensions and size (`height:width:size`).
    pub imageinfo: String,
    /// QRZ database serial number.
    pub serial: String,
    /// QRZ callsign last modified date.
    pub moddate: String,
    /// Metro Service Area (USPS).
    #[serde(rename = "MSA")]
    pub msa: String,
    /// Telephone area code (USA).
    #[serde(rename = "AreaCode")]
    pub area_code: String,
    /// Time zone (USA).
    #[serde(rename = "TimeZone")]
    pub time_zone: String,
    /// GMT time offset.
    #[serde(rename = "GMTOffset", deserialize_with = "lenient_int")]
    pub gmt_offset: i64,
    /// Daylight saving time observed.
    #[serde(rename = "DST")]
    pub dst: String,
    /// Will accept eQSL.
    pub eqsl: String,
    /// Will return paper QSL.
    pub mqsl: String,
    /// CQ zone identifier.
    #[serde(deserialize_with = "lenient_int")]
    pub cqzone: i64,
    /// ITU zone identifier.
    #[serde(deserialize_with = "lenient_int")]
    pub ituzone: i64,
    /// Operator's year of birth.
    pub born: String,
    /// User who manages this callsign on QRZ.
    pub user: String,
    /// Will accept LoTW.
    pub lotw: String,
    /// IOTA designator.
    pub iota: String,
    /// How the lat/lon were derived (user, geocode, grid, zip, state, dxcc).
    pub geoloc: String,
    /// Attention address line.
    pub attn: String,
    /// Nickname.
    pub nickname: String,
    /// Combined full name and nickname in the format used by QRZ.
    pub name_fmt: String,
}

impl Callsign {
    /// Creates an empty record for the given callsign.
    pub fn new(call: impl Into<String>) -> Self {
        Self {
            call: call.into(),
            ..Default::default()
        }
    }

    /// Returns the operator's display name.
    ///
    /// Prefers the service's formatted name and falls back to
    /// `fname name`.
    pub fn display_name(&self) -> String {
        if !self.name_fmt.is_empty() {
            return self.name_fmt.clone();
        }
        [self.fname.as_str(), self.name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns `(wire name, value)` pairs for every field, in wire order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        CALLSIGN_FIELDS
            .iter()
            .map(|(name, get)| (*name, get(self)))
            .collect()
    }
}

/// Wire names and getters for every callsign field, in the order the
/// service documents them.
pub const CALLSIGN_FIELDS: &[(&str, FieldGetter<Callsign>)] = &[
    ("call", |c| c.call.clone()),
    ("xref", |c| c.xref.clone()),
    ("aliases", |c| c.aliases.clone()),
    ("dxcc", |c| c.dxcc.clone()),
    ("fname", |c| c.fname.clone()),
    ("name", |c| c.name.clone()),
    ("addr1", |c| c.addr1.clone()),
    ("addr2", |c| c.addr2.clone()),
    ("state", |c| c.state.clone()),
    ("zip", |c| c.zip.clone()),
    ("country", |c| c.country.clone()),
    ("ccode", |c| c.ccode.clone()),
    ("lat", |c| c.lat.clone()),
    ("lon", |c| c.lon.clone()),
    ("grid", |c| c.grid.clone()),
    ("county", |c| c.county.clone()),
    ("fips", |c| c.fips.clone()),
    ("land", |c| c.land.clone()),
    ("efdate", |c| c.efdate.clone()),
    ("expdate", |c| c.expdate.clone()),
    ("p_call", |c| c.previous_call.clone()),
    ("class", |c| c.license_class.clone()),
    ("codes", |c| c.codes.clone()),
    ("qslmgr", |c| c.qslmgr.clone()),
    ("email", |c| c.email.clone()),
    ("url", |c| c.url.clone()),
    ("u_views", |c| c.u_views.to_string()),
    ("bio", |c| c.bio.to_string()),
    ("biodate", |c| c.biodate.clone()),
    ("image", |c| c.image.clone()),
    ("imageinfo", |c| c.imageinfo.clone()),
    ("serial", |c| c.serial.clone()),
    ("moddate", |c| c.moddate.clone()),
    ("MSA", |c| c.msa.clone()),
    ("AreaCode", |c| c.area_code.clone()),
    ("TimeZone", |c| c.time_zone.clone()),
    ("GMTOffset", |c| c.gmt_offset.to_string()),
    ("DST", |c| c.dst.clone()),
    ("eqsl", |c| c.eqsl.clone()),
    ("mqsl", |c| c.mqsl.clone()),
    ("cqzone", |c| c.cqzone.to_string()),
    ("ituzone", |c| c.ituzone.to_string()),
    ("born", |c| c.born.clone()),
    ("user", |c| c.user.clone()),
    ("lotw", |c| c.lotw.clone()),
    ("iota", |c| c.iota.clone()),
    ("geoloc", |c| c.geoloc.clone()),
    ("attn", |c| c.attn.clone()),
    ("nickname", |c| c.nickname.clone()),
    ("name_fmt", |c| c.name_fmt.clone()),
];

/// Parses an integer field from element text, yielding 0 for empty or
/// unparsable text.
pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .and_then(|text| text.parse().ok())
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_formatted_name() {
        let mut callsign = Callsign::new("W1AW");
        callsign.fname = "Hiram".to_string();
        callsign.name = "Maxim".to_string();
        assert_eq!(callsign.display_name(), "Hiram Maxim");

        callsign.name_fmt = "Hiram Percy Maxim".to_string();
        assert_eq!(callsign.display_name(), "Hiram Percy Maxim");
    }

    #[test]
    fn test_display_name_empty() {
        assert_eq!(Callsign::new("W1AW").display_name(), "");
    }

    #[test]
    fn test_field_table_covers_every_field() {
        let callsign = Callsign::new("W1AW");
        let fields = callsign.fields();

        assert_eq!(fields.len(), 50);
        assert_eq!(fields[0], ("call", "W1AW".to_string()));
        assert_eq!(fields.last().map(|(name, _)| *name), Some("name_fmt"));
    }

    #[test]
    fn test_field_table_uses_wire_names() {
        let mut callsign = Callsign::new("W1AW");
        callsign.license_class = "E".to_string();
        callsign.previous_call = "W1XX".to_string();
        callsign.gmt_offset = -5;

        let fields = callsign.fields();
        let get = |name: &str| {
            fields
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.clone())
        };

        assert_eq!(get("class").as_deref(), Some("E"));
        assert_eq!(get("p_call").as_deref(), Some("W1XX"));
        assert_eq!(get("GMTOffset").as_deref(), Some("-5"));
    }
}
