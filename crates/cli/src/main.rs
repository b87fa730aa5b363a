//! Product catalog command-line client

use std::{
    error::Error,
    io::{self, Write},
    process::ExitCode,
    sync::Arc,
};

use tracing::error;

use catalog_app::context::AppContext;

use crate::{
    config::CliConfig, errors::CliError, navigator::LoggingNavigator, observability::init,
};

mod commands;
mod config;
mod errors;
mod navigator;
mod observability;
mod render;

/// Catalog client entry point
#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(source) = init(&config.logging) {
        report(&source);

        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Invalid) => ExitCode::FAILURE,
        Err(source) => {
            error!("command failed: {source}");

            report(&source);

            ExitCode::FAILURE
        }
    }
}

async fn run(config: CliConfig) -> Result<(), CliError> {
    let app = AppContext::from_config(
        config.repository.products_config(),
        Arc::new(LoggingNavigator),
    )?;

    let mut out = io::stdout().lock();
    let mut input = io::stdin().lock();

    commands::run(config.command, &app, &mut out, &mut input).await?;

    out.flush()?;

    Ok(())
}

/// Print `error` and its causes to stderr.
fn report(error: &dyn Error) {
    let mut stderr = io::stderr().lock();
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    if writeln!(stderr, "error: {message}").is_err() {
        error!("failed to write error report: {message}");
    }
}
