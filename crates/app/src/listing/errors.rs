//! Catalog list errors.

use thiserror::Error;

use crate::domain::products::{ProductsRepositoryError, models::ProductId};

#[derive(Debug, Error)]
pub enum ListError {
    #[error("failed to load products")]
    LoadFailed(#[source] ProductsRepositoryError),

    #[error("failed to delete product {id}")]
    MutationFailed {
        id: ProductId,
        #[source]
        source: ProductsRepositoryError,
    },
}
