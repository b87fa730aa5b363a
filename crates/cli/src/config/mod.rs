//! Command-line configuration

use clap::Parser;

use crate::{
    commands::Command,
    config::{logging::LoggingConfig, repository::RepositoryConfig},
};

pub(crate) mod logging;
pub(crate) mod repository;

pub(crate) use logging::LogFormat;

/// Product catalog client configuration
#[derive(Debug, Parser)]
#[command(name = "catalog", about = "Product catalog client", long_about = None)]
pub(crate) struct CliConfig {
    /// Remote product store settings.
    #[command(flatten)]
    pub(crate) repository: RepositoryConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Action to run.
    #[command(subcommand)]
    pub(crate) command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
