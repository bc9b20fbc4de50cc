//! Coordinate conversion tool
//!
//! Converts a single point between Cartesian, polar, spherical and
//! cylindrical coordinates and prints the result line, ready to be piped to a
//! clipboard tool.
//!
//! Usage:
//!   cargo run --bin coordconv -- --mode cartesian-to-spherical -p 4 1 2 3
//!   cargo run --bin coordconv -- --list-modes

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use coordconv::shell::{
    outcome_for_error, ConverterSession, FormInput, InputLayout, ShellOutcome, INVALID_SELECTION,
};
use coordconv::{ConversionMode, Precision};
use log::debug;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Coordinate conversion tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts points between Cartesian, polar, spherical and cylindrical coordinates",
    long_about = None,
    allow_negative_numbers = true
)]
struct Args {
    /// Conversion to run: slug, selector title or index (see --list-modes)
    #[arg(short, long, default_value = "cartesian-to-polar")]
    mode: String,

    /// Digits after the decimal point (1-10)
    #[arg(short, long, default_value_t = 2)]
    precision: i64,

    /// Print the outcome as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// List the available conversions and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_modes: bool,

    /// Enable debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// First component (x or r)
    first: Option<String>,

    /// Second component (y or θ)
    second: Option<String>,

    /// Optional third component (z or φ) for 3D conversions
    third: Option<String>,
}

/// Text destined for stdout and stderr, plus whether the run succeeded
#[derive(Debug, PartialEq)]
struct Report {
    stdout: String,
    stderr: String,
    success: bool,
}

impl Report {
    fn success(stdout: String) -> Self {
        Report {
            stdout,
            stderr: String::new(),
            success: true,
        }
    }

    fn failure(stderr: String) -> Self {
        Report {
            stdout: String::new(),
            stderr,
            success: false,
        }
    }
}

/// Renders the selector entries with their input and output labels
fn list_modes() -> String {
    let mut out = format!("{:<4} {:<26} {:<30} {}\n", "#", "Mode", "Title", "Components");
    out.push_str("-------------------------------------------------------\n");
    for mode in ConversionMode::ALL {
        out.push_str(&format!(
            "{:<4} {:<26} {:<30} ({}) -> ({})\n",
            mode.index(),
            mode.slug(),
            mode.title(),
            mode.source_labels().join(", "),
            mode.target_labels().join(", ")
        ));
    }
    out
}

/// Routes the outcome to stdout or stderr
fn report(outcome: &ShellOutcome, session: &ConverterSession, json: bool) -> Result<Report> {
    let ok = matches!(outcome, ShellOutcome::Result(text) if text != INVALID_SELECTION);

    if json {
        let layout = session.mode().map(InputLayout::for_mode);
        let doc = serde_json::json!({
            "mode": session.mode(),
            "precision": session.precision(),
            "inputs": layout,
            "outcome": outcome,
        });
        return Ok(Report {
            stdout: format!("{}\n", serde_json::to_string_pretty(&doc)?),
            stderr: String::new(),
            success: ok,
        });
    }

    Ok(match outcome {
        ShellOutcome::Result(text) if ok => Report::success(format!("{}\n", text)),
        ShellOutcome::Result(text) => Report::failure(format!("{}\n", text)),
        ShellOutcome::Notification { title, message } => {
            Report::failure(format!("{}: {}\n", title, message))
        }
    })
}

fn run(args: Args) -> Result<Report> {
    if args.list_modes {
        return Ok(Report::success(list_modes()));
    }

    let mut session = ConverterSession::default();
    if let Ok(layout) = session.select(&args.mode) {
        debug!("input fields: {:?}", layout.labels);
    }

    match Precision::new(args.precision) {
        Ok(precision) => session.set_precision(precision),
        Err(err) => return report(&outcome_for_error(&err), &session, args.json),
    }

    let form = FormInput::new(
        args.first.unwrap_or_default(),
        args.second.unwrap_or_default(),
        args.third.unwrap_or_default(),
    );
    let outcome = session.submit(&form);
    report(&outcome, &session, args.json)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(args) {
        Ok(report) => {
            print!("{}", report.stdout);
            eprint!("{}", report.stderr);
            if report.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
