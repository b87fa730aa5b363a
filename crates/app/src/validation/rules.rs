//! Declarative per-field rules.

use crate::{
    domain::products::dates::parse_date,
    validation::reasons::{ErrorReason, Field},
};

/// A single synchronous check on a field value.
///
/// Length and date rules ignore empty values; emptiness is reported by
/// [`FieldRule::Required`] alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// The value must not be empty.
    Required,

    /// At least this many characters.
    MinLength(usize),

    /// At most this many characters.
    MaxLength(usize),

    /// The value must parse as a calendar date.
    Date,
}

impl FieldRule {
    /// Apply the rule, returning the reason it failed.
    #[must_use]
    pub fn check(self, value: &str) -> Option<ErrorReason> {
        match self {
            Self::Required => value.is_empty().then_some(ErrorReason::Required),
            _ if value.is_empty() => None,
            Self::MinLength(min) => {
                (value.chars().count() < min).then_some(ErrorReason::TooShort { min })
            }
            Self::MaxLength(max) => {
                (value.chars().count() > max).then_some(ErrorReason::TooLong { max })
            }
            Self::Date => parse_date(value)
                .is_none()
                .then_some(ErrorReason::InvalidDate),
        }
    }
}

/// The rules registered for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub rules: Vec<FieldRule>,
}

impl FieldSpec {
    #[must_use]
    pub fn new(field: Field, rules: impl Into<Vec<FieldRule>>) -> Self {
        Self {
            field,
            rules: rules.into(),
        }
    }
}

/// Rules for the product form.
#[must_use]
pub fn product_field_specs() -> Vec<FieldSpec> {
    use FieldRule::{Date, MaxLength, MinLength, Required};

    vec![
        FieldSpec::new(Field::Id, [Required, MinLength(3), MaxLength(10)]),
        FieldSpec::new(Field::Name, [Required, MinLength(5), MaxLength(100)]),
        FieldSpec::new(Field::Description, [Required, MinLength(10), MaxLength(200)]),
        FieldSpec::new(Field::Logo, [Required]),
        FieldSpec::new(Field::DateRelease, [Required, Date]),
        FieldSpec::new(Field::DateRevision, [Required, Date]),
    ]
}
