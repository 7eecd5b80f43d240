//! Output formatters for schedules

use anyhow::Result;
use colored::*;
use timegrid_core::{DaySchedule, Entry};

/// Print matched entries as human-readable cards, one per session.
pub fn print_entries_human(title: &str, schedule: &DaySchedule, entries: &[Entry]) {
    println!("{}", format!("Timetable: {}", title).bold());
    println!();

    if entries.is_empty() {
        println!("{}", "No sessions found.".yellow());
        return;
    }

    for entry in entries {
        println!("{} {}", "Time:".bold(), entry.time.cyan().bold());
        println!("  {} {}", "Venue:".bold(), entry.venue);
        println!("  {} {}", "Subject:".bold(), entry.subject);
        println!("  {} {}", "Department:".bold(), entry.department);
        println!("  {} {}", "Class:".bold(), entry.class_name);
        println!();
    }

    println!("{} {}", "Sessions:".bold(), entries.len());
    if schedule.skipped_cells > 0 {
        println!(
            "{}",
            format!(
                "Note: {} cell(s) on this sheet were skipped as unparseable",
                schedule.skipped_cells
            )
            .bright_black()
        );
    }
}

/// Print matched entries as JSON.
pub fn print_entries_json(day: &str, schedule: &DaySchedule, entries: &[Entry]) -> Result<()> {
    let output = serde_json::json!({
        "day": day,
        "entries": entries,
        "summary": {
            "total": entries.len(),
            "skipped_cells": schedule.skipped_cells,
        }
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print the day sheet names.
pub fn print_days_human(days: &[&str]) {
    println!("{}", "Days:".bold());
    for day in days {
        println!("  {}", day.cyan());
    }
}

pub fn print_days_json(days: &[&str]) -> Result<()> {
    let output = serde_json::json!({ "days": days });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Report a day with no sheet in the workbook. Not a failure: the caller
/// exits 0 with nothing to show.
pub fn print_no_data(day: &str, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "day": day,
            "entries": [],
            "error": "sheet not found",
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format!("No timetable data for '{}'.", day).yellow());
    }
    Ok(())
}
