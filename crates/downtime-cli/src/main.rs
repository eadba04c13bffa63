//! `downtime` CLI — check, expand, and dump exclusion configuration files.
//!
//! ## Usage
//!
//! ```sh
//! # Validate an exclusion file
//! downtime check -i exclusions.conf
//!
//! # Combined excluded time over January 2025, one range per line
//! downtime expand --from 2025-01-01 --to 2025-02-01 -i exclusions.conf
//!
//! # Same, as JSON
//! downtime expand --from 2025-01-01 --to 2025-02-01 -i exclusions.conf --json
//!
//! # Per-rule ranges without combination (stdin input)
//! echo 'exc monday <9:00:00' | downtime expand --from 2025-01-01 --to 2025-02-01 --raw
//!
//! # Diagnostic dump of each parsed rule
//! downtime dump -i exclusions.conf
//! ```

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use downtime_core::{ExclusionSet, Range};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "downtime",
    version,
    about = "Exclusion rules for time tracking"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an exclusion configuration file
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Expand all rules into concrete ranges within a window
    Expand {
        /// Start of the window, inclusive (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        from: String,
        /// End of the window, exclusive (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        to: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit the ranges as JSON
        #[arg(long)]
        json: bool,
        /// Per-rule ranges in rule order, without merging or day-on overrides
        #[arg(long)]
        raw: bool,
    },
    /// Print the diagnostic form of each parsed rule
    Dump {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let set = load_set(input.as_deref())?;
            let plural = if set.len() == 1 { "" } else { "s" };
            println!("{} exclusion rule{} OK", set.len(), plural);
        }
        Commands::Expand {
            from,
            to,
            input,
            output,
            json,
            raw,
        } => {
            let bound = Range::new(parse_when(&from)?, parse_when(&to)?);
            let set = load_set(input.as_deref())?;

            let ranges = if raw {
                let mut all = Vec::new();
                for rule in set.rules() {
                    all.extend(
                        rule.ranges(&bound)
                            .with_context(|| format!("Failed to expand '{}'", rule.serialize()))?,
                    );
                }
                all
            } else {
                set.excluded_ranges(&bound)
                    .context("Failed to expand exclusions")?
            };

            let rendered = if json {
                serde_json::to_string_pretty(&ranges)?
            } else {
                ranges
                    .iter()
                    .map(|r| format!("{} - {}\n", r.start, r.end))
                    .collect()
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Dump { input } => {
            let set = load_set(input.as_deref())?;
            for rule in set.rules() {
                print!("{}", rule.dump());
            }
        }
    }

    Ok(())
}

/// Read and parse the exclusion configuration from a file or stdin.
fn load_set(path: Option<&str>) -> Result<ExclusionSet> {
    let text = read_input(path)?;
    ExclusionSet::parse(&text).context("Invalid exclusion configuration")
}

/// Parse a window boundary: a date (midnight) or a full datetime.
fn parse_when(s: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    bail!("Unrecognized date or datetime: '{s}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
