//! # dysfunction-cost binary entry point
//!
//! Reads one JSON request from a file or stdin and prints the JSON result.
//! Logs go to stderr so stdout stays machine-readable.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use dysfunction_cost::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};
use dysfunction_cost::domain::dysfunction::{
    CalculationError, CalculationInput, CalculationService, RawDriverScores, ValidationError,
};

/// Team dysfunction cost calculator.
#[derive(Parser, Debug)]
#[command(name = "dysfunction-cost", version, about, long_about = None)]
struct Cli {
    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the Total Cost of Dysfunction for a calculation input.
    Calculate {
        /// JSON file holding the input; stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Compute the readiness score for a set of driver scores.
    Readiness {
        /// JSON file holding the driver scores; stdin when omitted.
        input: Option<PathBuf>,
    },
}

impl Commands {
    fn input(&self) -> Option<&Path> {
        match self {
            Commands::Calculate { input } | Commands::Readiness { input } => input.as_deref(),
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessOutput {
    readiness_score: rust_decimal::Decimal,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.logging);

    let raw = read_input(cli.command.input())?;
    println!("{}", execute(&cli.command, &raw, cli.pretty)?);
    Ok(())
}

/// Runs one subcommand against its raw JSON input and renders the output.
fn execute(command: &Commands, raw: &str, pretty: bool) -> Result<String, CliError> {
    match command {
        Commands::Calculate { .. } => {
            let input: CalculationInput = serde_json::from_str(raw)?;
            let result = CalculationService::calculate(&input)?;
            to_json(&result, pretty)
        }
        Commands::Readiness { .. } => {
            let scores: RawDriverScores = serde_json::from_str(raw)?;
            let readiness_score = CalculationService::readiness_from_raw(&scores)?;
            to_json(&ReadinessOutput { readiness_score }, pretty)
        }
    }
}

/// Validation failures are rendered as structured JSON, anything else as text.
fn render_error(err: &CliError) -> String {
    match err {
        CliError::Calculation(CalculationError::Validation(inner))
        | CliError::Validation(inner) => inner.to_json().to_string(),
        other => other.to_string(),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    // RUST_LOG wins over configuration.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
