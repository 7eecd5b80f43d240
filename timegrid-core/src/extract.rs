//! Sheet extractor: fixed-layout timetable grid to flat schedule entries
//!
//! The workbook layout is fixed by convention, not configuration: one sheet
//! per day, slot labels in a single header row, one venue per row, and each
//! session cell holding two lines of text ("Subject Department-Class" then
//! the instructor name).

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::ScheduleError;
use crate::reader::{Sheet, Workbook};

/// Grid row holding the time-slot labels
pub const SLOT_ROW: usize = 1;
/// Grid columns holding the time-slot labels, one per slot
pub const SLOT_COLS: Range<usize> = 1..11;
/// Grid rows holding one venue each
pub const VENUE_ROWS: Range<usize> = 4..58;
/// Grid column holding the venue label
pub const VENUE_COL: usize = 0;

/// Subject codes parsed with the elective convention (multi-word subject,
/// department-class as the last token). Closed set.
pub const ELECTIVE_SUBJECTS: [&str; 3] = ["FOM", "FOA", "POE"];

/// One scheduled session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Slot label, e.g. "8:30-9:50". Positional, not a parseable clock time.
    pub time: String,
    /// Room/location label
    pub venue: String,
    /// Course or elective name, possibly multi-word
    pub subject: String,
    /// Department code; empty when the cell text has no recognizable token
    pub department: String,
    /// Section label within the department; empty when the department-class
    /// token carries no hyphen
    pub class_name: String,
}

/// Everything extracted from one day sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    /// Slot labels in grid column order; queries sort results by position
    /// in this list
    pub slots: Vec<String>,
    /// Entries in row-major order (venue outer, slot inner)
    pub entries: Vec<Entry>,
    /// Non-empty cells skipped by best-effort parsing (fewer than two lines
    /// or fewer than two tokens)
    pub skipped_cells: usize,
}

/// Extract the schedule for one day sheet.
///
/// A sheet smaller than the fixed ranges yields entries only for the
/// in-bounds region; missing rows and columns read as empty cells.
pub fn extract_day(workbook: &Workbook, day: &str) -> Result<DaySchedule, ScheduleError> {
    let sheet = workbook
        .get_sheet(day)
        .ok_or_else(|| ScheduleError::SheetNotFound(day.to_string()))?;

    let slot_labels = slot_labels(sheet);
    let mut entries = Vec::new();
    let mut skipped_cells = 0;

    for row in VENUE_ROWS {
        let Some(venue) = sheet
            .text(row, VENUE_COL)
            .map(str::trim)
            .filter(|v| !v.is_empty())
        else {
            continue;
        };

        for (col, slot) in &slot_labels {
            let Some(text) = sheet.text(row, *col) else {
                continue;
            };
            if text.trim().is_empty() {
                continue;
            }

            match parse_cell(text) {
                Some(session) => entries.push(Entry {
                    time: slot.clone(),
                    venue: venue.to_string(),
                    subject: session.subject,
                    department: session.department,
                    class_name: session.class_name,
                }),
                None => skipped_cells += 1,
            }
        }
    }

    Ok(DaySchedule {
        day: day.to_string(),
        slots: slot_labels.into_iter().map(|(_, s)| s).collect(),
        entries,
        skipped_cells,
    })
}

/// Slot labels with their grid columns. Columns with an empty label produce
/// no entries, keeping the non-empty `time` invariant.
fn slot_labels(sheet: &Sheet) -> Vec<(usize, String)> {
    SLOT_COLS
        .filter_map(|col| {
            let label = sheet.text(SLOT_ROW, col)?.trim();
            if label.is_empty() {
                None
            } else {
                Some((col, label.to_string()))
            }
        })
        .collect()
}

struct Session {
    subject: String,
    department: String,
    class_name: String,
}

/// Parse one session cell, or None if the cell should be skipped.
fn parse_cell(text: &str) -> Option<Session> {
    let mut lines = text.lines();
    let header = lines.next()?.trim();
    // Second line is the instructor. Required by the convention but not
    // retained in the output model.
    lines.next()?;

    let tokens: Vec<&str> = header.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    let (subject, department_class) =
        if ELECTIVE_SUBJECTS.contains(&tokens[0]) || header.contains("Lab") {
            // Electives and labs may have multi-word subjects; the
            // department-class token is always last.
            (tokens[..tokens.len() - 1].join(" "), tokens[tokens.len() - 1])
        } else {
            // Regular class: first token is the subject, second is the
            // department-class token, anything beyond is ignored.
            (tokens[0].to_string(), tokens[1])
        };

    let (department, class_name) = split_department_class(department_class);

    Some(Session {
        subject: subject.trim().to_string(),
        department,
        class_name,
    })
}

/// Split a department-class token on the first hyphen. Without a hyphen the
/// whole token is the department and the class is empty.
fn split_department_class(token: &str) -> (String, String) {
    match token.split_once('-') {
        Some((department, class_name)) => {
            (department.trim().to_string(), class_name.trim().to_string())
        }
        None => (token.trim().to_string(), String::new()),
    }
}
