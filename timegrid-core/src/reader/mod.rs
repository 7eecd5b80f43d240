//! Excel/ODS file reader using calamine

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::path::Path;

pub mod workbook;

pub use workbook::{Sheet, Workbook};

use crate::error::ScheduleError;

/// Read a workbook from a file path.
///
/// All sheets are materialized into text grids up front; the returned
/// workbook is read-only for the rest of the process.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook, ScheduleError> {
    let path = path.as_ref();
    let mut excel: Sheets<_> =
        open_workbook_auto(path).map_err(|source| ScheduleError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let mut sheets = Vec::new();
    for sheet_name in excel.sheet_names() {
        // A sheet that fails to load is kept as an empty grid so the other
        // sheets stay queryable.
        let range = excel.worksheet_range(&sheet_name).ok();
        sheets.push(parse_sheet(&sheet_name, range.as_ref()));
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

fn parse_sheet(name: &str, range: Option<&Range<Data>>) -> Sheet {
    let Some(range) = range else {
        return Sheet::empty(name);
    };
    let Some((start_row, start_col)) = range.start() else {
        return Sheet::empty(name);
    };

    let (height, width) = range.get_size();
    let total_cols = start_col as usize + width;
    let mut rows = vec![vec![None; total_cols]; start_row as usize + height];

    for (r, row) in range.rows().enumerate() {
        for (c, data) in row.iter().enumerate() {
            if let Some(text) = cell_text(data) {
                rows[start_row as usize + r][start_col as usize + c] = Some(text);
            }
        }
    }

    Sheet {
        name: name.to_string(),
        rows,
    }
}

/// Render a calamine cell value as text, or None for empty cells.
/// Numeric slot/venue labels keep an integer rendering.
fn cell_text(data: &Data) -> Option<String> {
    match data {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::Error(e) => Some(format!("{:?}", e)),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xlsx");

        let err = read_workbook(&path).unwrap_err();
        assert!(matches!(err, ScheduleError::SourceUnavailable { .. }));
        assert!(!err.is_no_data());
    }

    #[test]
    fn test_unreadable_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.xlsx");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"this is not a zip archive").unwrap();

        let err = read_workbook(&path).unwrap_err();
        assert!(matches!(err, ScheduleError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_cell_text_rendering() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String("Lab 1".to_string())), Some("Lab 1".to_string()));
        assert_eq!(cell_text(&Data::Float(301.0)), Some("301".to_string()));
        assert_eq!(cell_text(&Data::Float(1.5)), Some("1.5".to_string()));
        assert_eq!(cell_text(&Data::Int(42)), Some("42".to_string()));
    }
}
