//! Column layout shared by the console and Markdown renderers.

use qrz_core::{Callsign, Dxcc};

/// A labelled column with its cell getter.
pub struct Column<T> {
    /// Header label.
    pub header: &'static str,
    /// Cell value.
    pub value: fn(&T) -> String,
}

/// Columns shown for callsign records.
pub const CALLSIGN_COLUMNS: &[Column<Callsign>] = &[
    Column { header: "Callsign", value: |c| c.call.clone() },
    Column { header: "Name", value: Callsign::display_name },
    Column { header: "Class", value: |c| c.license_class.clone() },
    Column { header: "Address", value: |c| c.addr1.clone() },
    Column { header: "City", value: |c| c.addr2.clone() },
    Column { header: "County", value: |c| c.county.clone() },
    Column { header: "State", value: |c| c.state.clone() },
    Column { header: "Zip", value: |c| c.zip.clone() },
    Column { header: "Country", value: |c| c.country.clone() },
    Column { header: "Grid", value: |c| c.grid.clone() },
];

/// Columns shown for DXCC entities.
pub const DXCC_COLUMNS: &[Column<Dxcc>] = &[
    Column { header: "DXCC Code", value: |d| d.dxcc.clone() },
    Column { header: "DXCC Name", value: |d| d.name.clone() },
    Column { header: "Continent", value: |d| d.continent.clone() },
    Column { header: "Country Code (2)", value: |d| d.cc.clone() },
    Column { header: "Country Code (3)", value: |d| d.ccc.clone() },
    Column { header: "ITU Zone", value: |d| d.ituzone.clone() },
    Column { header: "CQ Zone", value: |d| d.cqzone.clone() },
    Column { header: "Timezone", value: |d| d.timezone.clone() },
    Column { header: "Latitude", value: |d| d.lat.clone() },
    Column { header: "Longitude", value: |d| d.lon.clone() },
    Column { header: "Notes", value: |d| d.notes.clone() },
];

/// Header row plus one row of cells per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Header labels.
    pub headers: Vec<String>,
    /// Cell rows, each as long as `headers`.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from records and a column layout.
    pub fn build<T>(columns: &[Column<T>], records: &[&T]) -> Self {
        Self {
            headers: columns.iter().map(|c| c.header.to_string()).collect(),
            rows: records
                .iter()
                .map(|&record| columns.iter().map(|c| (c.value)(record)).collect())
                .collect(),
        }
    }

    /// Returns the display width of each column.
    pub fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}
