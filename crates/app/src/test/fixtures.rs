//! Test Fixtures

use std::sync::Arc;

use jiff::civil::date;

use crate::{
    domain::products::models::{Product, ProductId},
    navigation::{MockNavigator, Navigator},
};

pub(crate) fn make_product(id: &str, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: format!("{name} description"),
        logo: format!("https://example.com/{id}.png"),
        date_release: date(2024, 6, 27),
        date_revision: date(2025, 6, 27),
    }
}

/// A navigator that fails the test if it is ever asked to move.
pub(crate) fn silent_navigator() -> Arc<dyn Navigator> {
    let mut navigator = MockNavigator::new();

    navigator.expect_navigate().never();

    Arc::new(navigator)
}
