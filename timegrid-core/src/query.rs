//! Query layer: filter extracted entries for display
//!
//! Results are ordered by position in the day's slot-label list rather than
//! by lexical comparison of the time labels, since unpadded labels sort
//! wrongly as strings ("10:00" before "9:00").

use std::collections::HashSet;

use crate::extract::{DaySchedule, Entry};

/// Entries matching a department and class exactly.
///
/// Comparison is case-sensitive; callers normalize query terms to uppercase
/// (see [`crate::input`]) to match the workbook's own casing.
pub fn by_class(schedule: &DaySchedule, department: &str, class_name: &str) -> Vec<Entry> {
    let mut matches: Vec<Entry> = schedule
        .entries
        .iter()
        .filter(|e| e.department == department && e.class_name == class_name)
        .cloned()
        .collect();
    sort_by_slot(&mut matches, &schedule.slots);
    matches
}

/// Entries matching any requested elective subject AND any requested class.
///
/// Membership is tested independently per field: an entry with subject A and
/// class Y matches the requests [(A, X), (B, Y)] even though (A, Y) was never
/// asked for. This mirrors the original filter semantics and is kept
/// deliberately; see DESIGN.md.
pub fn electives(schedule: &DaySchedule, pairs: &[(String, String)]) -> Vec<Entry> {
    let subjects: HashSet<&str> = pairs.iter().map(|(s, _)| s.as_str()).collect();
    let classes: HashSet<&str> = pairs.iter().map(|(_, c)| c.as_str()).collect();

    let mut matches: Vec<Entry> = schedule
        .entries
        .iter()
        .filter(|e| subjects.contains(e.subject.as_str()) && classes.contains(e.class_name.as_str()))
        .cloned()
        .collect();
    sort_by_slot(&mut matches, &schedule.slots);
    matches
}

/// Stable sort by slot-list position. Entries whose time label is not in the
/// slot list sort last, keeping their extraction order.
fn sort_by_slot(entries: &mut [Entry], slots: &[String]) {
    entries.sort_by_key(|e| {
        slots
            .iter()
            .position(|s| *s == e.time)
            .unwrap_or(slots.len())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(time: &str, venue: &str, subject: &str, department: &str, class_name: &str) -> Entry {
        Entry {
            time: time.to_string(),
            venue: venue.to_string(),
            subject: subject.to_string(),
            department: department.to_string(),
            class_name: class_name.to_string(),
        }
    }

    fn schedule(slots: &[&str], entries: Vec<Entry>) -> DaySchedule {
        DaySchedule {
            day: "Monday".to_string(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
            entries,
            skipped_cells: 0,
        }
    }

    #[test]
    fn test_by_class_exact_match() {
        let sched = schedule(
            &["8:30"],
            vec![
                entry("8:30", "Room 1", "DBMS", "BCS", "3F"),
                entry("8:30", "Room 2", "OOP", "BCS", "3A"),
                entry("8:30", "Room 3", "DBMS", "BSE", "3F"),
            ],
        );

        let matches = by_class(&sched, "BCS", "3F");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].subject, "DBMS");
    }

    #[test]
    fn test_by_class_slot_order_not_lexical() {
        // "10:00" sorts before "9:00" as a string; slot order must win.
        let sched = schedule(
            &["8:30", "9:00", "10:00"],
            vec![
                entry("10:00", "Room 1", "DBMS", "BCS", "3F"),
                entry("9:00", "Room 2", "OS", "BCS", "3F"),
                entry("8:30", "Room 3", "OOP", "BCS", "3F"),
            ],
        );

        let times: Vec<String> = by_class(&sched, "BCS", "3F")
            .into_iter()
            .map(|e| e.time)
            .collect();
        assert_eq!(times, vec!["8:30", "9:00", "10:00"]);
    }

    #[test]
    fn test_by_class_unknown_slot_sorts_last() {
        let sched = schedule(
            &["8:30"],
            vec![
                entry("??", "Room 1", "DBMS", "BCS", "3F"),
                entry("8:30", "Room 2", "OS", "BCS", "3F"),
            ],
        );

        let times: Vec<String> = by_class(&sched, "BCS", "3F")
            .into_iter()
            .map(|e| e.time)
            .collect();
        assert_eq!(times, vec!["8:30", "??"]);
    }

    #[test]
    fn test_by_class_empty_result_is_normal() {
        let sched = schedule(&["8:30"], vec![entry("8:30", "Room 1", "DBMS", "BCS", "3F")]);
        assert!(by_class(&sched, "BSE", "2A").is_empty());
    }

    #[test]
    fn test_electives_cross_product_looseness() {
        // (FOM, 3C) was never requested as a pair, but FOM is a requested
        // subject and 3C a requested class, so the entry matches.
        let sched = schedule(
            &["8:30"],
            vec![entry("8:30", "Room 1", "FOM", "CS", "3C")],
        );
        let pairs = vec![
            ("FOM".to_string(), "3B".to_string()),
            ("POE".to_string(), "3C".to_string()),
        ];

        let matches = electives(&sched, &pairs);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].subject, "FOM");
        assert_eq!(matches[0].class_name, "3C");
    }

    #[test]
    fn test_electives_requires_both_fields_to_match() {
        let sched = schedule(
            &["8:30"],
            vec![
                entry("8:30", "Room 1", "FOM", "CS", "2A"),
                entry("8:30", "Room 2", "HCI", "CS", "3B"),
            ],
        );
        let pairs = vec![("FOM".to_string(), "3B".to_string())];

        // Subject matches but class does not, and vice versa
        assert!(electives(&sched, &pairs).is_empty());
    }

    #[test]
    fn test_electives_sorted_by_slot() {
        let sched = schedule(
            &["8:30", "9:00", "10:00"],
            vec![
                entry("10:00", "Room 1", "FOM", "CS", "3B"),
                entry("8:30", "Room 2", "POE", "EE", "3B"),
            ],
        );
        let pairs = vec![
            ("FOM".to_string(), "3B".to_string()),
            ("POE".to_string(), "3B".to_string()),
        ];

        let times: Vec<String> = electives(&sched, &pairs).into_iter().map(|e| e.time).collect();
        assert_eq!(times, vec!["8:30", "10:00"]);
    }
}
