//! Per-field and form-level validation state.

use crate::{
    domain::products::models::ProductDraft,
    validation::{
        reasons::{ErrorSet, Field},
        uniqueness::UniquenessTracker,
    },
};

/// Validity of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    /// An asynchronous check for the current value is outstanding.
    Pending,
}

/// Value, touched flag and active errors of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    touched: bool,
    errors: ErrorSet,
}

impl FieldState {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub(crate) fn touch(&mut self) {
        self.touched = true;
    }

    pub(crate) fn set_errors(&mut self, errors: ErrorSet) {
        self.errors = errors;
    }

    pub(crate) fn errors_mut(&mut self) -> &mut ErrorSet {
        &mut self.errors
    }
}

/// Field states plus form-level (cross-field) errors and the uniqueness check.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    id: FieldState,
    name: FieldState,
    description: FieldState,
    logo: FieldState,
    date_release: FieldState,
    date_revision: FieldState,
    form_errors: ErrorSet,
    uniqueness: UniquenessTracker,
}

impl FormState {
    #[must_use]
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Logo => &self.logo,
            Field::DateRelease => &self.date_release,
            Field::DateRevision => &self.date_revision,
        }
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Logo => &mut self.logo,
            Field::DateRelease => &mut self.date_release,
            Field::DateRevision => &mut self.date_revision,
        }
    }

    /// Errors attached to the form rather than to one field.
    #[must_use]
    pub fn form_errors(&self) -> &ErrorSet {
        &self.form_errors
    }

    pub(crate) fn set_form_errors(&mut self, errors: ErrorSet) {
        self.form_errors = errors;
    }

    #[must_use]
    pub fn uniqueness(&self) -> &UniquenessTracker {
        &self.uniqueness
    }

    pub(crate) fn uniqueness_mut(&mut self) -> &mut UniquenessTracker {
        &mut self.uniqueness
    }

    /// Blank every field. The uniqueness generation carries over, so tickets
    /// issued before the reset stay stale.
    pub(crate) fn reset(&mut self) {
        let mut uniqueness = std::mem::take(&mut self.uniqueness);

        uniqueness.clear();

        *self = Self {
            uniqueness,
            ..Self::default()
        };
    }

    /// Raw values of all fields.
    #[must_use]
    pub fn values(&self) -> ProductDraft {
        ProductDraft {
            id: self.id.value.clone(),
            name: self.name.value.clone(),
            description: self.description.value.clone(),
            logo: self.logo.value.clone(),
            date_release: self.date_release.value.clone(),
            date_revision: self.date_revision.value.clone(),
        }
    }

    #[must_use]
    pub fn field_validity(&self, field: Field) -> Validity {
        if field == Field::Id && self.uniqueness.is_pending() {
            return Validity::Pending;
        }

        if self.field(field).errors.is_empty() {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    pub(crate) fn touch_all(&mut self) {
        for field in Field::ALL {
            self.field_mut(field).touch();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::reasons::ErrorReason;

    use super::*;

    #[test]
    fn values_collects_every_field() {
        let mut state = FormState::default();

        state.field_mut(Field::Id).set_value("abc");
        state.field_mut(Field::DateRevision).set_value("2025-01-01");

        let values = state.values();

        assert_eq!(values.id, "abc");
        assert_eq!(values.date_revision, "2025-01-01");
        assert!(values.name.is_empty());
    }

    #[test]
    fn id_is_pending_while_a_check_is_outstanding() {
        let mut state = FormState::default();

        state.uniqueness_mut().begin("abc");

        assert_eq!(state.field_validity(Field::Id), Validity::Pending);
        assert_eq!(state.field_validity(Field::Name), Validity::Valid);
    }

    #[test]
    fn field_with_errors_is_invalid() {
        let mut state = FormState::default();

        state
            .field_mut(Field::Logo)
            .set_errors(ErrorSet::from([ErrorReason::Required]));

        assert_eq!(state.field_validity(Field::Logo), Validity::Invalid);
    }

    #[test]
    fn reset_blanks_fields_but_not_ticket_generations() {
        let mut state = FormState::default();

        state.field_mut(Field::Id).set_value("abc");
        state.field_mut(Field::Id).touch();

        let before = state.uniqueness_mut().begin("abc");

        state.reset();

        assert_eq!(state.field(Field::Id), &FieldState::default());
        assert!(!state.uniqueness().is_pending());

        let after = state.uniqueness_mut().begin("abc");

        assert!(after.generation() > before.generation());
        assert_ne!(before, after);
    }

    #[test]
    fn touch_all_marks_every_field() {
        let mut state = FormState::default();

        state.touch_all();

        assert!(Field::ALL.iter().all(|field| state.field(*field).is_touched()));
    }
}
