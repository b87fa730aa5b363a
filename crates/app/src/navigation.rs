//! Navigation capability consumed by the controllers.

use std::fmt::{Display, Formatter, Result as FmtResult};

use mockall::automock;

use crate::domain::products::models::ProductId;

/// Views the controllers may ask to move to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ProductList,
    CreateProduct,
    EditProduct(ProductId),
    ProductDetail(ProductId),
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ProductList => f.write_str("/products"),
            Self::CreateProduct => f.write_str("/add"),
            Self::EditProduct(id) => write!(f, "/edit/{id}"),
            Self::ProductDetail(id) => write!(f, "/product/{id}"),
        }
    }
}

#[automock]
pub trait Navigator: Send + Sync {
    /// Request a transition to `route`.
    fn navigate(&self, route: Route);
}
