//! `review-comments` CLI entrypoint.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use review_comments::{
    CliArgs, ConsoleProgress, ExportError, LogProgress, ReportConfig, run_export, usage,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) if error.is_missing_parameter() => {
            if report_missing_parameters(&error).is_err() {
                return ExitCode::FAILURE;
            }
            wait_for_key_press();
            ExitCode::SUCCESS
        }
        Err(error) => {
            if report_critical_error(&error).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ExportError> {
    let cli = CliArgs::parse();
    let config = ReportConfig::from_cli(&cli)?;
    say("Validated the parameters, good to go...")?;

    let summary = if io::stdout().is_terminal() {
        run_export(&config, &ConsoleProgress::stdout()).await?
    } else {
        run_export(&config, &LogProgress).await?
    };

    tracing::debug!("report has {} rows", summary.rows);
    say("All done....PR Review Comments are written to the CSV!!!!")
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`, defaulting
/// to warnings plus this crate's info events.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,review_comments=info"));
    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        tracing::debug!("failed to install tracing subscriber: {error}");
    }
}

fn say(message: &str) -> Result<(), ExportError> {
    writeln!(io::stdout().lock(), "{message}").map_err(|error| ExportError::Io {
        message: error.to_string(),
    })
}

fn report_missing_parameters(error: &ExportError) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "ERROR: {error}")?;
    writeln!(stdout)?;
    writeln!(stdout, "{}", usage())
}

fn report_critical_error(error: &ExportError) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "CRITICAL ERROR")?;
    writeln!(stdout, "Error Description: {error}")
}

/// Keeps the usage text on screen when launched from a desktop shell.
fn wait_for_key_press() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }
    let mut line = String::new();
    if let Err(error) = stdin.lock().read_line(&mut line) {
        tracing::debug!("failed to read key press: {error}");
    }
}
