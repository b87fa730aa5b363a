//! Delete confirmation workflow.

use crate::domain::products::models::Product;

/// Where a delete stands. The record and the confirmation prompt cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,

    /// The user asked to delete this record and has not yet confirmed.
    PendingConfirmation(Product),

    /// The delete call for this record is in flight.
    InFlight(Product),
}

impl DeleteState {
    /// The record awaiting confirmation, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Product> {
        match self {
            Self::PendingConfirmation(product) => Some(product),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether a confirmation prompt should be shown.
    #[must_use]
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Self::PendingConfirmation(_))
    }
}
