//! `anka` — command-line front end for the identity engine.
//!
//! One subcommand per engine operation: single profile (interactive,
//! failing on bad dates), pairwise compatibility, bulk catalog ingestion
//! (batch-defaulting, never aborts), and the rolling cycle numbers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use anka_core::{
    IdentityProfile, MasterPolicy, cue_profile, personal_cycles, profile_from_parts,
    universal_day,
};
use anka_match::score;
use anka_time::{date_parts, parse_date, today};

#[derive(Parser)]
#[command(name = "anka", about = "Numerology & astrology identity engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full identity profile for one person
    Profile {
        /// Birth date, [-]YYYY-MM-DD (sign required for BC years)
        #[arg(long)]
        date: String,
        /// Full birth name; omit for date-only profiles
        #[arg(long)]
        name: Option<String>,
    },
    /// Compatibility score for two people
    Compat {
        #[arg(long)]
        date_a: String,
        #[arg(long)]
        name_a: Option<String>,
        #[arg(long)]
        date_b: String,
        #[arg(long)]
        name_b: Option<String>,
    },
    /// Bulk catalog ingestion: one `name,date` per line, never aborts
    Cues {
        /// Input file of comma-separated name,date lines
        #[arg(long)]
        input: PathBuf,
    },
    /// Personal and universal cycle numbers
    Cycles {
        /// Birth date, [-]YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Calendar date to evaluate, defaults to today (UTC)
        #[arg(long)]
        on: Option<String>,
        /// Collapse 11/22/33 to single digits in the cycle numbers
        #[arg(long)]
        collapse_masters: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Profile { date, name } => {
            let profile = profile_from_parts(name.as_deref(), &date)?;
            print_json(&profile)
        }
        Commands::Compat { date_a, name_a, date_b, name_b } => {
            let a = profile_from_parts(name_a.as_deref(), &date_a)?;
            let b = profile_from_parts(name_b.as_deref(), &date_b)?;
            let result = score(&a.numerology, &b.numerology, Some((&a.zodiac, &b.zodiac)));
            print_json(&result)
        }
        Commands::Cues { input } => run_cues(&input),
        Commands::Cycles { date, on, collapse_masters } => {
            let birth = parse_date(&date)?;
            let on = match on {
                Some(s) => parse_date(&s)?,
                None => today(),
            };
            let policy = if collapse_masters {
                MasterPolicy::Collapse
            } else {
                MasterPolicy::Preserve
            };
            let cycles = personal_cycles(date_parts(birth), date_parts(on), policy);
            print_json(&serde_json::json!({
                "personal_year": cycles.personal_year,
                "personal_month": cycles.personal_month,
                "personal_day": cycles.personal_day,
                "universal_day": universal_day(date_parts(on), policy),
            }))
        }
    }
}

fn run_cues(input: &PathBuf) -> Result<()> {
    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let mut total = 0usize;
    let mut degraded = 0usize;
    let default = IdentityProfile::degraded_default();

    for line in BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, date) = split_cue(line);
        let profile = cue_profile(name, date);
        if profile == default {
            degraded += 1;
        }
        total += 1;
        println!(
            "{}",
            serde_json::json!({
                "name": name,
                "life_path": profile.numerology.life_path_number,
                "energy_signature": profile.energy_signature,
            })
        );
    }

    info!(total, degraded, "cue ingestion finished");
    Ok(())
}

/// Split a catalog line into (name, date). A line without a comma keeps
/// the whole text as the name and an empty date, which the batch entry
/// point then degrades and logs; the run must outlive any one bad line.
fn split_cue(line: &str) -> (&str, &str) {
    match line.split_once(',') {
        Some((name, date)) => (name.trim(), date.trim()),
        None => (line.trim(), ""),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
