//! Single product view.

mod controller;
mod errors;

pub use controller::*;
pub use errors::DetailError;
