//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    detail::DetailController,
    domain::products::{
        HttpProductsConfig, HttpProductsRepository, ProductsRepository, ProductsRepositoryError,
    },
    form::FormController,
    listing::ListController,
    navigation::Navigator,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build products client")]
    Products(#[source] ProductsRepositoryError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsRepository>,
    pub navigator: Arc<dyn Navigator>,
}

impl AppContext {
    /// Build application context against the remote product store.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built from `config`.
    pub fn from_config(
        config: HttpProductsConfig,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppInitError> {
        let products = HttpProductsRepository::new(config).map_err(AppInitError::Products)?;

        Ok(Self {
            products: Arc::new(products),
            navigator,
        })
    }

    #[must_use]
    pub fn list_controller(&self) -> ListController {
        ListController::new(Arc::clone(&self.products), Arc::clone(&self.navigator))
    }

    #[must_use]
    pub fn form_controller(&self) -> FormController {
        FormController::new(Arc::clone(&self.products), Arc::clone(&self.navigator))
    }

    #[must_use]
    pub fn detail_controller(&self) -> DetailController {
        DetailController::new(Arc::clone(&self.products), Arc::clone(&self.navigator))
    }
}
