//! Derived list view: `cap(filter(products, term), page_size)`.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::domain::products::models::Product;

/// Number of records shown when no page size was chosen.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size must be a positive integer")]
pub struct ZeroPageSize;

/// A positive cap on the number of records displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1))
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ZeroPageSize;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(size).map(Self).ok_or(ZeroPageSize)
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

/// Whether `name` contains `term`, ignoring case. An empty term matches everything.
#[must_use]
pub fn matches_term(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Records whose name matches `term`, in collection order.
pub fn matching<'a>(products: &'a [Product], term: &str) -> impl Iterator<Item = &'a Product> {
    products
        .iter()
        .filter(move |product| matches_term(&product.name, term))
}

/// Records whose name matches `term`, in collection order, at most `page_size` of them.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    term: &str,
    page_size: PageSize,
) -> Vec<&'a Product> {
    matching(products, term).take(page_size.get()).collect()
}
