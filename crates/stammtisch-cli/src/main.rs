//! `stammtisch` CLI — evaluate attendance logs from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Evaluate an input document (stdin → stdout)
//! cat season.json | stammtisch evaluate
//!
//! # Evaluate from file to file, pinning "today"
//! stammtisch evaluate -i season.json -o result.json --today 2026-10-16
//!
//! # Demo dataset, evaluated (seed 42 unless given)
//! stammtisch mock --seed 7
//!
//! # Only the generated demo input document
//! stammtisch mock --input-only -o demo.json
//!
//! # Classify a single excuse
//! stammtisch classify "Meeting bis 20 Uhr"
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG`; stdout carries only
//! the JSON document.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use stammtisch_engine::mock::{generate_input, MockConfig, DEFAULT_SEED};
use stammtisch_engine::{classify, evaluate_input, today_in, EvaluationInput, EvaluationResult};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "stammtisch",
    version,
    about = "Attendance statistics for a weekly get-together"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TodayArgs {
    /// Treat this date as today (YYYY-MM-DD); later event days are ignored
    #[arg(long)]
    today: Option<NaiveDate>,
    /// IANA timezone used to determine today when --today is not given
    #[arg(long, default_value = "Europe/Berlin")]
    timezone: String,
}

#[derive(Args)]
struct OutputArgs {
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an input document and print the statistics as JSON
    Evaluate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        today: TodayArgs,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Generate the seeded demo dataset and evaluate it
    Mock {
        /// Seed for the demo generator
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Print the generated input document instead of evaluating it
        #[arg(long)]
        input_only: bool,
        #[command(flatten)]
        today: TodayArgs,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Print the excuse category for a message
    Classify {
        /// The excuse text (empty string for "no message")
        message: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate { input, today, out } => {
            let raw = read_input(input.as_deref())?;
            let mut document =
                EvaluationInput::from_json(&raw).context("Failed to parse input document")?;
            if today.today.is_some() {
                document.today = today.today;
            }
            let fallback = match document.today {
                Some(pinned) => pinned,
                None => resolve_today(&today)?,
            };

            let result = evaluate_input(&document, fallback).context("Failed to evaluate input")?;
            write_result(&out, &result)?;
        }
        Commands::Mock {
            seed,
            input_only,
            today,
            out,
        } => {
            let today = resolve_today(&today)?;
            let config = MockConfig::demo(today).with_seed(seed);
            let document = generate_input(&config).context("Failed to generate demo data")?;

            if input_only {
                let json = if out.compact {
                    serde_json::to_string(&document)?
                } else {
                    document.to_json_pretty()?
                };
                write_output(out.output.as_deref(), &json)?;
            } else {
                let result =
                    evaluate_input(&document, today).context("Failed to evaluate demo data")?;
                write_result(&out, &result)?;
            }
        }
        Commands::Classify { message } => {
            let category = classify(Some(&message));
            println!("{}\t{}", category.key(), category.label());
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "stammtisch=info,stammtisch_engine=info".into());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// `--today` if given, otherwise the current date in `--timezone`.
fn resolve_today(args: &TodayArgs) -> Result<NaiveDate> {
    match args.today {
        Some(date) => Ok(date),
        None => today_in(&args.timezone)
            .with_context(|| format!("Cannot determine today in '{}'", args.timezone)),
    }
}

fn write_result(out: &OutputArgs, result: &EvaluationResult) -> Result<()> {
    let json = result
        .to_json(!out.compact)
        .context("Failed to serialize result")?;
    write_output(out.output.as_deref(), &json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
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
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
