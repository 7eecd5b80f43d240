use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use timegrid_core::{Config, ScheduleError, Timetable, input, query};

mod formatter;

#[derive(Parser)]
#[command(name = "timegrid")]
#[command(about = "Timetable viewer for fixed-layout Excel schedules", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the timetable workbook (overrides the config file)
    #[arg(short, long, value_name = "FILE", global = true)]
    file: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List the day sheets in the workbook
    Days,
    /// Schedule for a department and class, e.g. `class Monday "BCS 3F"`
    Class {
        /// Day sheet name
        day: String,
        /// Query in "Department Class" format
        query: String,
    },
    /// Elective sessions, e.g. `electives Monday "FOM 3B, POE 3C"`
    Electives {
        /// Day sheet name
        day: String,
        /// Query in "Subject Class, Subject Class" format
        query: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let workbook_path = resolve_workbook_path(&cli)?;
    let mut timetable = Timetable::open(&workbook_path)
        .with_context(|| format!("Failed to open timetable: {}", workbook_path.display()))?;

    match &cli.command {
        Command::Days => {
            let days = timetable.days();
            match cli.format {
                OutputFormat::Human => formatter::print_days_human(&days),
                OutputFormat::Json => formatter::print_days_json(&days)?,
            }
        }
        Command::Class { day, query } => {
            let class_query = match input::parse_class_query(query) {
                Ok(q) => q,
                Err(ScheduleError::InvalidFormat(item)) => {
                    bail!("Invalid query '{}': expected \"Department Class\"", item)
                }
                Err(e) => return Err(e.into()),
            };

            let Some(schedule) = load_day(&mut timetable, day)? else {
                formatter::print_no_data(day, cli.format.is_json())?;
                return Ok(());
            };

            let title = format!(
                "{} {} on {}",
                class_query.department, class_query.class_name, day
            );
            let entries = query::by_class(schedule, &class_query.department, &class_query.class_name);
            match cli.format {
                OutputFormat::Human => {
                    formatter::print_entries_human(&title, schedule, &entries);
                }
                OutputFormat::Json => formatter::print_entries_json(day, schedule, &entries)?,
            }
        }
        Command::Electives { day, query } => {
            let elective_query = input::parse_elective_query(query);
            for item in &elective_query.rejected {
                eprintln!(
                    "Skipping invalid item '{}': expected \"Subject Class\"",
                    item
                );
            }
            if elective_query.pairs.is_empty() {
                bail!("No valid elective items in query '{}'", query.trim());
            }

            let Some(schedule) = load_day(&mut timetable, day)? else {
                formatter::print_no_data(day, cli.format.is_json())?;
                return Ok(());
            };

            let title = format!("Electives on {}", day);
            let entries = query::electives(schedule, &elective_query.pairs);
            match cli.format {
                OutputFormat::Human => {
                    formatter::print_entries_human(&title, schedule, &entries);
                }
                OutputFormat::Json => formatter::print_entries_json(day, schedule, &entries)?,
            }
        }
    }

    Ok(())
}

impl OutputFormat {
    fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Workbook path from --file, or from the config file (--config or
/// ./timegrid.toml).
fn resolve_workbook_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(file) = &cli.file {
        return Ok(file.clone());
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("timegrid.toml"));
    if config_path.exists() {
        let config = Config::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        Ok(config.workbook)
    } else {
        bail!("No workbook given: pass --file or provide {}", config_path.display())
    }
}

/// A missing day sheet is "nothing to show", not a failure; other errors
/// propagate.
fn load_day<'a>(
    timetable: &'a mut Timetable,
    day: &str,
) -> Result<Option<&'a timegrid_core::DaySchedule>> {
    match timetable.day_schedule(day) {
        Ok(schedule) => Ok(Some(schedule)),
        Err(e) if e.is_no_data() => Ok(None),
        Err(e) => Err(e.into()),
    }
}
