//! `slots` CLI — compute bookable slots for the next seven days.
//!
//! ## Usage
//!
//! ```sh
//! # Availability for the week starting 2014-08-10, events from a file
//! slots availability --date 2014-08-10 -i events.json
//!
//! # Events from stdin, one line per day
//! cat events.json | slots availability --date 2014-08-10 --format text
//!
//! # Custom grid/horizon/closed days
//! slots availability --date 2014-08-10 -i events.json --policy policy.toml
//!
//! # Report malformed events without computing anything
//! slots validate -i events.json
//! ```
//!
//! Events are a JSON array of objects with `kind` (`"opening"` or `"appointment"`),
//! `starts_at`, `ends_at` and an optional `weekly_recurring` flag. Timestamps are
//! civil (zone-less) ISO 8601.

use anyhow::{Context, Result};
use availability_engine::{
    get_availabilities, AvailabilityDay, EventStore, FetchedEvents, SlotPolicy,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Bookable slots from openings and appointments"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute availability for the window starting at --date
    Availability {
        /// First day of the window (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Slot policy TOML file (defaults: 30-minute grid, 7 days, Sunday closed)
        #[arg(long)]
        policy: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Check an events file and report malformed intervals
    Validate {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Availability {
            date,
            input,
            output,
            policy,
            format,
        } => {
            let start = parse_date(&date)?;
            let policy = match policy.as_deref() {
                Some(path) => SlotPolicy::from_file(path)
                    .with_context(|| format!("Failed to load slot policy: {}", path))?,
                None => SlotPolicy::default(),
            };
            let store = read_events(input.as_deref())?;

            let days = get_availabilities(&store, start, &policy);

            let rendered = match format {
                OutputFormat::Json => {
                    let mut json = serde_json::to_string_pretty(&days)?;
                    json.push('\n');
                    json
                }
                OutputFormat::Text => render_text(&days),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Validate { input } => {
            let store = read_events(input.as_deref())?;
            let fetched = FetchedEvents::partition(store.events().iter().cloned());

            println!(
                "{} events: {} appointments, {} weekly openings, {} one-off openings",
                fetched.len(),
                fetched.appointments.len(),
                fetched.recurring_openings.len(),
                fetched.non_recurring_openings.len()
            );

            let malformed: Vec<_> = store
                .events()
                .iter()
                .enumerate()
                .filter(|(_, e)| !e.is_well_formed())
                .collect();
            for (index, event) in &malformed {
                println!(
                    "event {}: ends_at {} is not after starts_at {} (ignored)",
                    index, event.ends_at, event.starts_at
                );
            }
            println!("{} malformed", malformed.len());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", raw))
}

/// One line per day: the date, two spaces, then the slots (or `-`).
fn render_text(days: &[AvailabilityDay]) -> String {
    let mut out = String::new();
    for day in days {
        let slots = if day.slots.is_empty() {
            "-".to_string()
        } else {
            day.slots
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        out.push_str(&format!("{}  {}\n", day.date, slots));
    }
    out
}

fn read_events(path: Option<&str>) -> Result<EventStore> {
    let store = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path))?;
            EventStore::from_json_str(&json)
                .with_context(|| format!("Failed to parse events from {}", path))?
        }
        None => EventStore::from_reader(io::stdin().lock())
            .context("Failed to parse events from stdin")?,
    };
    tracing::debug!(events = store.len(), "loaded events");
    Ok(store)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
