//! Product create/edit form.

mod controller;
mod errors;

pub use controller::*;
pub use errors::FormError;
