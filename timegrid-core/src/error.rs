//! Typed errors for the public library surface

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by extraction and query operations
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The workbook file is missing or could not be opened
    #[error("timetable source unavailable: {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The requested day has no matching sheet in the workbook.
    /// Other sheets remain usable.
    #[error("no sheet named '{0}' in the workbook")]
    SheetNotFound(String),

    /// A free-text query item did not match the expected format
    #[error("invalid query format: '{0}'")]
    InvalidFormat(String),
}

impl ScheduleError {
    /// True for conditions the caller should render as "nothing to show"
    /// rather than a fatal failure.
    pub fn is_no_data(&self) -> bool {
        matches!(self, ScheduleError::SheetNotFound(_))
    }
}
