//! Output formatting for CLI.

mod console;
mod csv;
mod json;
mod markdown;
mod table;
mod xml;

use anyhow::Result;
use clap::ValueEnum;
use qrz_core::{BioRecord, CALLSIGN_FIELDS, Callsign, DXCC_FIELDS, Dxcc, LookupAction, LookupRecord};

pub use console::ConsoleFormatter;
use table::{CALLSIGN_COLUMNS, DXCC_COLUMNS, Table};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Boxed table for the terminal.
    #[default]
    Console,
    /// Comma-separated values with every field.
    Csv,
    /// JSON array with every field.
    Json,
    /// XML document with every field.
    Xml,
    /// Markdown table.
    #[value(alias = "markdown", alias = "table")]
    Md,
}

/// Renders the records of one batch.
///
/// Every record is expected to be of the kind `action` produces; others are
/// skipped.
pub fn render(
    format: OutputFormat,
    action: LookupAction,
    records: &[LookupRecord],
    use_colors: bool,
) -> Result<String> {
    match action {
        LookupAction::Callsign => render_callsigns(format, &callsigns(records), use_colors),
        LookupAction::Dxcc => render_dxcc(format, &dxcc(records), use_colors),
        LookupAction::Bio => render_bios(format, &bios(records)),
    }
}

fn render_callsigns(
    format: OutputFormat,
    records: &[&Callsign],
    use_colors: bool,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Console => {
            ConsoleFormatter::new(use_colors).format_table(&Table::build(CALLSIGN_COLUMNS, records))
        }
        OutputFormat::Md => markdown::format_table(&Table::build(CALLSIGN_COLUMNS, records)),
        OutputFormat::Csv => {
            let header: Vec<&str> = CALLSIGN_FIELDS.iter().map(|(name, _)| *name).collect();
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|c| c.fields().into_iter().map(|(_, value)| value).collect())
                .collect();
            csv::format_rows(&header, &rows)
        }
        OutputFormat::Json => json::format_records(records)?,
        OutputFormat::Xml => xml::format_callsigns(records)?,
    })
}

fn render_dxcc(format: OutputFormat, records: &[&Dxcc], use_colors: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Console => {
            ConsoleFormatter::new(use_colors).format_table(&Table::build(DXCC_COLUMNS, records))
        }
        OutputFormat::Md => markdown::format_table(&Table::build(DXCC_COLUMNS, records)),
        OutputFormat::Csv => {
            let header: Vec<&str> = DXCC_FIELDS.iter().map(|(name, _)| *name).collect();
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|d| d.fields().into_iter().map(|(_, value)| value).collect())
                .collect();
            csv::format_rows(&header, &rows)
        }
        OutputFormat::Json => json::format_records(records)?,
        OutputFormat::Xml => xml::format_dxcc(records)?,
    })
}

fn render_bios(format: OutputFormat, records: &[&BioRecord]) -> Result<String> {
    Ok(match format {
        OutputFormat::Console => console::format_bios(records),
        OutputFormat::Md => markdown::format_bios(records),
        OutputFormat::Csv => csv::format_bios(records),
        OutputFormat::Json => json::format_records(records)?,
        OutputFormat::Xml => xml::format_bios(records)?,
    })
}

fn callsigns(records: &[LookupRecord]) -> Vec<&Callsign> {
    records.iter().filter_map(LookupRecord::as_callsign).collect()
}

fn dxcc(records: &[LookupRecord]) -> Vec<&Dxcc> {
    records.iter().filter_map(LookupRecord::as_dxcc).collect()
}

fn bios(records: &[LookupRecord]) -> Vec<&BioRecord> {
    records.iter().filter_map(LookupRecord::as_bio).collect()
}
