//! Boxed console tables with optional ANSI styling.

use qrz_core::BioRecord;

use super::table::Table;

// ============================================================================
// ANSI Styles
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

// Box drawing characters
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    /// Creates a new console formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a table with centered bold headers.
    pub fn format_table(&self, table: &Table) -> String {
        let widths = table.widths();
        let mut lines = Vec::with_capacity(table.rows.len() + 4);

        lines.push(border(&widths, '┌', '┬', '┐'));

        let headers: Vec<String> = table
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, &width)| self.bold(&center(header, width)))
            .collect();
        lines.push(row_line(&headers));
        lines.push(border(&widths, '├', '┼', '┤'));

        for row in &table.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| pad_right(cell, width))
                .collect();
            lines.push(row_line(&cells));
        }

        lines.push(border(&widths, '└', '┴', '┘'));
        lines.join("\n")
    }

    /// Formats a per-term error line.
    pub fn format_error(&self, term: &str, message: &str) -> String {
        if self.use_colors {
            format!("{BOLD}{term}{RESET}: {message}")
        } else {
            format!("{term}: {message}")
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Formats raw biography bodies, one after another.
pub fn format_bios(bios: &[&BioRecord]) -> String {
    bios.iter()
        .map(|bio| bio.html.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Layout Helpers
// ============================================================================

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|&width| HORIZONTAL.to_string().repeat(width + 2))
        .collect();
    format!("{left}{}{right}", segments.join(&middle.to_string()))
}

fn row_line(cells: &[String]) -> String {
    let inner = cells.join(&format!(" {VERTICAL} "));
    format!("{VERTICAL} {inner} {VERTICAL}")
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let total = width.saturating_sub(len);
    let left = total / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(total - left))
}
