//! Form controller errors.

use thiserror::Error;

use crate::{
    domain::products::{ProductsRepositoryError, models::ProductId},
    form::FormPhase,
    validation::Field,
};

#[derive(Debug, Error)]
pub enum FormError {
    #[error("product {0} not found")]
    RecordNotFound(ProductId),

    #[error("failed to load product {id}")]
    LoadFailed {
        id: ProductId,
        #[source]
        source: ProductsRepositoryError,
    },

    #[error("failed to save product")]
    MutationFailed(#[source] ProductsRepositoryError),

    #[error("form cannot be edited while {0:?}")]
    NotEditable(FormPhase),

    #[error("field `{0}` cannot be changed")]
    FieldLocked(Field),
}

impl FormError {
    /// Whether resubmitting the unchanged form may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::MutationFailed(_))
    }
}
