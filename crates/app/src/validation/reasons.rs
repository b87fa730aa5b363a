//! Validation error reasons.

use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Product form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// User-chosen identifier, immutable once created.
    Id,

    /// Display name.
    Name,

    /// Free-text description.
    Description,

    /// Logo URL or reference.
    Logo,

    /// Release date.
    DateRelease,

    /// Revision date, one year after release.
    DateRevision,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Description,
        Self::Logo,
        Self::DateRelease,
        Self::DateRevision,
    ];

    /// Wire and form name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Description => "description",
            Self::Logo => "logo",
            Self::DateRelease => "date_release",
            Self::DateRevision => "date_revision",
        }
    }

    /// Whether the field holds a calendar date.
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::DateRelease | Self::DateRevision)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A field name that is not part of the product form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| UnknownField(value.to_string()))
    }
}

/// Why a field or the form as a whole is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorReason {
    /// The field is empty.
    Required,

    /// Fewer characters than the minimum.
    TooShort { min: usize },

    /// More characters than the maximum.
    TooLong { max: usize },

    /// The value is not a calendar date.
    InvalidDate,

    /// Another product already uses this id.
    IdAlreadyExists,

    /// Revision date is not exactly one year after the release date.
    DateRelationshipInvalid,
}

impl Display for ErrorReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Required => f.write_str("this field is required"),
            Self::TooShort { min } => write!(f, "must be at least {min} characters"),
            Self::TooLong { max } => write!(f, "must be at most {max} characters"),
            Self::InvalidDate => f.write_str("must be a valid date (YYYY-MM-DD)"),
            Self::IdAlreadyExists => f.write_str("a product with this id already exists"),
            Self::DateRelationshipInvalid => {
                f.write_str("revision date must be exactly one year after the release date")
            }
        }
    }
}

/// Active error reasons; empty means valid.
pub type ErrorSet = BTreeSet<ErrorReason>;
