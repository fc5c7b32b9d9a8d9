//! GitHub-flavored Markdown tables.

use qrz_core::BioRecord;

use super::table::Table;

/// Formats a pipe table.
pub fn format_table(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 2);

    lines.push(row_line(&table.headers));
    lines.push(format!("|{}", " --- |".repeat(table.headers.len())));
    for row in &table.rows {
        lines.push(row_line(row));
    }

    lines.join("\n")
}

/// Formats biographies, each under a heading naming the callsign.
pub fn format_bios(bios: &[&BioRecord]) -> String {
    bios.iter()
        .map(|bio| format!("## {}\n\n{}\n", bio.call, bio.html))
        .collect::<Vec<_>>()
        .join("\n")
}

fn row_line(cells: &[String]) -> String {
    let escaped: Vec<String> = cells.iter().map(|cell| escape_cell(cell)).collect();
    format!("| {} |", escaped.join(" | "))
}

/// Escapes pipes and folds line breaks so a value stays in its cell.
pub(crate) fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}
