//! CSV output with every field quoted.

use qrz_core::BioRecord;

/// Formats a header row and one row per record.
pub fn format_rows(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    lines.push(join(header.iter().copied()));
    for row in rows {
        lines.push(join(row.iter().map(String::as_str)));
    }

    lines.join("\n")
}

/// Formats biographies as `call,html` rows.
pub fn format_bios(bios: &[&BioRecord]) -> String {
    let rows: Vec<Vec<String>> = bios
        .iter()
        .map(|bio| vec![bio.call.clone(), bio.html.clone()])
        .collect();
    format_rows(&["call", "html"], &rows)
}

fn join<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields.map(quote).collect::<Vec<_>>().join(",")
}

/// Quotes a field, doubling embedded quotes.
pub(crate) fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
