//! Workbook data structures

use std::path::PathBuf;

/// Represents a complete workbook, read once and immutable afterwards
#[derive(Debug, Clone)]
pub struct Workbook {
    pub path: PathBuf,
    /// One sheet per day, in workbook order
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get all sheet names
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// A worksheet as a dense grid of optional text cells.
///
/// The grid is anchored at A1 regardless of where the sheet's used range
/// starts, so the fixed layout offsets of the timetable convention index
/// directly into it. Out-of-bounds lookups read as empty cells.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Sheet {
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
        }
    }

    /// Text content of the cell at (row, col), if any
    pub fn text(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }

    /// Number of grid rows (including leading empty rows up to the anchor)
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}
