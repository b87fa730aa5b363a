//! Products

pub mod dates;
pub mod errors;
pub mod http;
pub mod models;
mod repository;

pub use errors::ProductsRepositoryError;
pub use http::{HttpProductsConfig, HttpProductsRepository};
pub use repository::*;
