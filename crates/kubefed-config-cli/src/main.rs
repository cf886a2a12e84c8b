// kubefed-config-cli/src/main.rs
// ============================================================================
// Module: KubeFed Config CLI Entry Point
// Description: Command dispatcher for manifest validation and feature listing.
// Purpose: Validate KubeFed config manifests offline before they are applied.
// Dependencies: clap, kubefed-config, serde_json, thiserror, tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! `kubefed-config validate` loads each manifest, validates every document,
//! and prints all violations. The process exits non-zero when any document is
//! invalid or any file cannot be loaded. `kubefed-config features` lists the
//! feature gates the validator accepts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use kubefed_config::FeatureRegistry;
use kubefed_config::JitterFactor;
use kubefed_config::OperatorConfigValidator;
use kubefed_config::TypeConfigValidator;
use kubefed_config::Validators;
use kubefed_config_cli::report::FileReport;
use kubefed_config_cli::report::feature_lines;
use kubefed_config_cli::report::validate_file;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// KubeFed config validator.
#[derive(Parser, Debug)]
#[command(name = "kubefed-config", version, disable_help_subcommand = true)]
struct Cli {
    /// Log validator activity to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate config manifests.
    Validate {
        /// Manifest files (YAML, JSON, or TOML).
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
        /// Validate type configs as a status sub-resource update.
        #[arg(long)]
        status: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Retry jitter applied in the leader election renew deadline check.
        #[arg(long, value_name = "FACTOR")]
        jitter_factor: Option<f64>,
    },
    /// List known feature gates.
    Features {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate {
            files,
            status,
            format,
            jitter_factor,
        } => command_validate(&files, status, format, jitter_factor),
        Commands::Features {
            format,
        } => command_features(format),
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Validates each file and prints the reports.
fn command_validate(
    files: &[PathBuf],
    status: bool,
    format: OutputFormat,
    jitter_factor: Option<f64>,
) -> CliResult<ExitCode> {
    let jitter = match jitter_factor {
        Some(value) => JitterFactor::new(value).map_err(|err| CliError::new(err.to_string()))?,
        None => JitterFactor::default(),
    };
    let validators = Validators::new(
        TypeConfigValidator::new(),
        OperatorConfigValidator::new(jitter, FeatureRegistry::default()),
    );

    let reports: Vec<FileReport> =
        files.iter().map(|path| validate_file(path, &validators, status)).collect();
    for report in reports.iter().filter(|report| report.error.is_some()) {
        warn!(file = %report.file, "manifest could not be validated");
    }
    debug!(files = reports.len(), "validation finished");

    match format {
        OutputFormat::Text => {
            for line in reports.iter().flat_map(FileReport::text_lines) {
                write_stdout_line(&line).map_err(|err| output_error(&err))?;
            }
        }
        OutputFormat::Json => write_json(&reports)?,
    }

    if reports.iter().all(FileReport::is_valid) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Lists the known feature gates.
fn command_features(format: OutputFormat) -> CliResult<ExitCode> {
    let registry = FeatureRegistry::default();
    match format {
        OutputFormat::Text => {
            for line in feature_lines(&registry) {
                write_stdout_line(&line).map_err(|err| output_error(&err))?;
            }
        }
        OutputFormat::Json => write_json(registry.specs())?,
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes pretty-printed JSON to stdout.
fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(format!("failed to encode json: {err}")))?;
    write_stdout_line(&text).map_err(|err| output_error(&err))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a stdout write failure.
fn output_error(error: &std::io::Error) -> CliError {
    CliError::new(format!("failed to write to stdout: {error}"))
}

/// Writes an error message and returns a failing exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
