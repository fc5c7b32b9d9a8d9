//! XML output mirroring the service's document layout.

use anyhow::Result;
use qrz_core::{BioRecord, Callsign, Dxcc};
use quick_xml::se::Serializer;
use serde::Serialize;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Serialize)]
#[serde(rename = "QRZDatabase")]
struct Document<'a> {
    #[serde(rename = "Callsign", skip_serializing_if = "Vec::is_empty")]
    callsigns: Vec<&'a Callsign>,
    #[serde(rename = "DXCC", skip_serializing_if = "Vec::is_empty")]
    dxcc: Vec<&'a Dxcc>,
    #[serde(rename = "Bio", skip_serializing_if = "Vec::is_empty")]
    bios: Vec<Bio<'a>>,
}

#[derive(Serialize)]
struct Bio<'a> {
    #[serde(rename = "@call")]
    call: &'a str,
    #[serde(rename = "$text")]
    html: &'a str,
}

impl Document<'_> {
    fn empty() -> Self {
        Self {
            callsigns: Vec::new(),
            dxcc: Vec::new(),
            bios: Vec::new(),
        }
    }
}

/// Formats callsign records.
pub fn format_callsigns(callsigns: &[&Callsign]) -> Result<String> {
    render(&Document {
        callsigns: callsigns.to_vec(),
        ..Document::empty()
    })
}

/// Formats DXCC entities.
pub fn format_dxcc(entities: &[&Dxcc]) -> Result<String> {
    render(&Document {
        dxcc: entities.to_vec(),
        ..Document::empty()
    })
}

/// Formats biographies as `<Bio call="..">` elements with escaped bodies.
pub fn format_bios(bios: &[&BioRecord]) -> Result<String> {
    render(&Document {
        bios: bios
            .iter()
            .map(|bio| Bio {
                call: &bio.call,
                html: &bio.html,
            })
            .collect(),
        ..Document::empty()
    })
}

fn render(document: &Document<'_>) -> Result<String> {
    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 2);
    document.serialize(serializer)?;

    Ok(format!("{DECLARATION}\n{body}"))
}
