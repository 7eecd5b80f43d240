//! timegrid-core: extract and query fixed-layout Excel timetables
//!
//! The workbook holds one sheet per day with a fixed grid convention: slot
//! labels in a header row, one venue per row, two-line session cells. This
//! library reads the workbook once, extracts day sheets into flat entry
//! lists, and answers department+class and elective queries over them.

pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod query;
pub mod reader;

use std::collections::HashMap;
use std::collections::hash_map::Entry as CacheEntry;
use std::path::Path;

pub use config::Config;
pub use error::ScheduleError;
pub use extract::{DaySchedule, Entry};
pub use input::{ClassQuery, ElectiveQuery};
pub use reader::Workbook;

/// Main timetable interface: a read-only workbook handle plus a per-day
/// extraction cache.
///
/// The handle is owned by the calling context and passed explicitly; there
/// is no process-wide global. Cached day schedules are immutable and never
/// invalidated, since the source file is assumed static for the run.
pub struct Timetable {
    workbook: Workbook,
    cache: HashMap<String, DaySchedule>,
}

impl Timetable {
    /// Open the workbook at `path`, reading all sheets once.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ScheduleError> {
        Ok(Self::from_workbook(reader::read_workbook(path)?))
    }

    /// Build a timetable over an already-read workbook.
    pub fn from_workbook(workbook: Workbook) -> Self {
        Self {
            workbook,
            cache: HashMap::new(),
        }
    }

    /// Day sheet names, in workbook order.
    pub fn days(&self) -> Vec<&str> {
        self.workbook.sheet_names()
    }

    /// Schedule for one day, extracted on first access and cached for the
    /// process lifetime.
    pub fn day_schedule(&mut self, day: &str) -> Result<&DaySchedule, ScheduleError> {
        match self.cache.entry(day.to_string()) {
            CacheEntry::Occupied(cached) => Ok(cached.into_mut()),
            CacheEntry::Vacant(slot) => {
                let schedule = extract::extract_day(&self.workbook, day)?;
                Ok(slot.insert(schedule))
            }
        }
    }
}
