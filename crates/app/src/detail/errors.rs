//! Product detail errors.

use thiserror::Error;

use crate::domain::products::{ProductsRepositoryError, models::ProductId};

#[derive(Debug, Error)]
pub enum DetailError {
    #[error("product {0} not found")]
    RecordNotFound(ProductId),

    #[error("failed to load product {id}")]
    LoadFailed {
        id: ProductId,
        #[source]
        source: ProductsRepositoryError,
    },

    #[error("no product loaded")]
    NotLoaded,

    #[error("failed to delete product {id}")]
    MutationFailed {
        id: ProductId,
        #[source]
        source: ProductsRepositoryError,
    },
}
