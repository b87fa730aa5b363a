//! Catalog list: the authoritative collection, its derived view and the delete workflow.

mod controller;
mod delete;
mod errors;
pub mod view;

pub use controller::*;
pub use delete::DeleteState;
pub use errors::ListError;
pub use view::{PageSize, ZeroPageSize};
