//! Product Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::products::dates;

/// Product identifier, chosen by the user at creation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Product Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Logo URL or reference.
    pub logo: String,

    /// Release date.
    #[serde(with = "dates::serde_date")]
    pub date_release: Date,

    /// Revision date, exactly one calendar year after release.
    #[serde(with = "dates::serde_date")]
    pub date_revision: Date,
}

/// Raw, unvalidated field values of a product as entered in a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: String,
    pub date_revision: String,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            logo: product.logo.clone(),
            date_release: product.date_release.to_string(),
            date_revision: product.date_revision.to_string(),
        }
    }
}

/// A draft could not be turned into a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{field}` is not a valid date: {value:?}")]
pub struct InvalidDraftDate {
    pub field: &'static str,
    pub value: String,
}

impl TryFrom<&ProductDraft> for Product {
    type Error = InvalidDraftDate;

    fn try_from(draft: &ProductDraft) -> Result<Self, Self::Error> {
        let parse = |field: &'static str, value: &str| {
            dates::parse_date(value).ok_or_else(|| InvalidDraftDate {
                field,
                value: value.to_string(),
            })
        };

        Ok(Self {
            id: ProductId::new(draft.id.clone()),
            name: draft.name.clone(),
            description: draft.description.clone(),
            logo: draft.logo.clone(),
            date_release: parse("date_release", &draft.date_release)?,
            date_revision: parse("date_revision", &draft.date_revision)?,
        })
    }
}
