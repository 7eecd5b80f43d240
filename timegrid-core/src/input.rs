//! Free-text query parsing
//!
//! The presentation layer collects queries as raw strings ("BCS 3F",
//! "FOM 3B, POE 3C"); the split rules live here so the CLI and tests share
//! them. Terms are normalized to uppercase to match the workbook's casing.

use crate::error::ScheduleError;

/// A tokenized department+class query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassQuery {
    pub department: String,
    pub class_name: String,
}

/// Parse a "Department Class" query. Whitespace-separated; the first token is
/// the department, the second the class, extra tokens are ignored.
pub fn parse_class_query(input: &str) -> Result<ClassQuery, ScheduleError> {
    let normalized = input.trim().to_uppercase();
    let mut tokens = normalized.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(department), Some(class_name)) => Ok(ClassQuery {
            department: department.to_string(),
            class_name: class_name.to_string(),
        }),
        _ => Err(ScheduleError::InvalidFormat(input.trim().to_string())),
    }
}

/// Result of parsing a comma-separated elective query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectiveQuery {
    /// (subject, class) pairs from well-formed items
    pub pairs: Vec<(String, String)>,
    /// Items that did not have exactly two tokens, reported per item while
    /// the valid ones are still processed
    pub rejected: Vec<String>,
}

/// Parse a "Subject Class, Subject Class" query. Items are comma-separated;
/// each item must hold exactly two whitespace-separated tokens.
pub fn parse_elective_query(input: &str) -> ElectiveQuery {
    let normalized = input.trim().to_uppercase();
    let mut query = ElectiveQuery::default();

    for item in normalized.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = item.split_whitespace().collect();
        if let [subject, class_name] = tokens[..] {
            query
                .pairs
                .push((subject.to_string(), class_name.to_string()));
        } else {
            query.rejected.push(item.to_string());
        }
    }

    query
}
