//! Product Store Config

use std::time::Duration;

use clap::Args;

use catalog_app::domain::products::{HttpProductsConfig, http::DEFAULT_BASE_URL};

/// Remote product store settings.
#[derive(Debug, Args)]
pub(crate) struct RepositoryConfig {
    /// Base URL of the product store
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_BASE_URL)]
    pub(crate) api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CATALOG_API_TIMEOUT_SECONDS", default_value_t = 10)]
    pub(crate) api_timeout_seconds: u64,
}

impl RepositoryConfig {
    /// Client settings for the product store.
    pub(crate) fn products_config(&self) -> HttpProductsConfig {
        HttpProductsConfig {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.api_timeout_seconds),
        }
    }
}
