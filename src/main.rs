//! Gleaner CLI entrypoint for harvesting review comments.

use std::io::{self, Write};
use std::process::ExitCode;

use gleaner::{GleanerConfig, HarvestError};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

/// Environment variable holding the `tracing` filter directive.
const LOG_FILTER_ENV: &str = "GLEANER_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "Error: {error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HarvestError> {
    let config = load_config()?;
    cli::harvest_comments::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`HarvestError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GleanerConfig, HarvestError> {
    GleanerConfig::load().map_err(|error| HarvestError::Configuration {
        message: error.to_string(),
    })
}

/// Sends diagnostics to stderr so stdout carries only progress lines.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
