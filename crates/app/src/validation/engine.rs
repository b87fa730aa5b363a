//! Validation engine.

use std::{
    collections::BTreeMap,
    fmt::{Debug, Formatter, Result as FmtResult},
    future::Future,
    sync::Arc,
};

use tracing::warn;

use crate::{
    domain::products::{
        ProductsRepository,
        dates::{expected_revision, parse_date},
        models::{ProductDraft, ProductId},
    },
    validation::{
        reasons::{ErrorReason, ErrorSet, Field},
        rules::{FieldRule, FieldSpec, product_field_specs},
        state::FormState,
        uniqueness::UniquenessOutcome,
    },
};

/// Field, cross-field and uniqueness rules for product records.
#[derive(Clone)]
pub struct ValidationEngine {
    rules: BTreeMap<Field, Vec<FieldRule>>,
    repository: Arc<dyn ProductsRepository>,
}

impl Debug for ValidationEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ValidationEngine")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl ValidationEngine {
    /// An engine with no field rules registered.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self {
            rules: BTreeMap::new(),
            repository,
        }
    }

    /// An engine with the product form rules registered.
    #[must_use]
    pub fn for_products(repository: Arc<dyn ProductsRepository>) -> Self {
        let mut engine = Self::new(repository);

        engine.register_rules(product_field_specs());

        engine
    }

    /// Append rules to their fields. Rules already registered are kept.
    pub fn register_rules(&mut self, specs: impl IntoIterator<Item = FieldSpec>) {
        for spec in specs {
            self.rules.entry(spec.field).or_default().extend(spec.rules);
        }
    }

    /// Every synchronous rule of `field` that `value` violates.
    #[must_use]
    pub fn validate_field(&self, field: Field, value: &str) -> ErrorSet {
        self.rules
            .get(&field)
            .into_iter()
            .flatten()
            .filter_map(|rule| rule.check(value))
            .collect()
    }

    /// The release/revision date relationship.
    ///
    /// Yields nothing unless both dates are present and parseable.
    #[must_use]
    pub fn validate_cross_field(&self, record: &ProductDraft) -> ErrorSet {
        let (Some(release), Some(revision)) = (
            parse_date(&record.date_release),
            parse_date(&record.date_revision),
        ) else {
            return ErrorSet::new();
        };

        if expected_revision(release) == Some(revision) {
            ErrorSet::new()
        } else {
            ErrorSet::from([ErrorReason::DateRelationshipInvalid])
        }
    }

    /// Ask the store whether `id` is already taken.
    ///
    /// Transport failures are logged and reported as
    /// [`UniquenessOutcome::Inconclusive`].
    pub async fn validate_unique(&self, id: &str) -> UniquenessOutcome {
        check_uniqueness(self.repository.as_ref(), id).await
    }

    /// An owned uniqueness check suitable for spawning.
    pub(crate) fn unique_check(
        &self,
        id: String,
    ) -> impl Future<Output = UniquenessOutcome> + Send + 'static {
        let repository = Arc::clone(&self.repository);

        async move { check_uniqueness(repository.as_ref(), &id).await }
    }

    /// True iff no field or form error is active and no uniqueness check is pending.
    #[must_use]
    pub fn is_form_valid(&self, state: &FormState) -> bool {
        Field::ALL
            .iter()
            .all(|field| state.field(*field).errors().is_empty())
            && state.form_errors().is_empty()
            && !state.uniqueness().is_pending()
    }
}

async fn check_uniqueness(repository: &dyn ProductsRepository, id: &str) -> UniquenessOutcome {
    match repository.check_id_exists(&ProductId::new(id)).await {
        Ok(true) => UniquenessOutcome::Taken,
        Ok(false) => UniquenessOutcome::Available,
        Err(error) => {
            warn!(id, "uniqueness check inconclusive, not blocking submission: {error}");

            UniquenessOutcome::Inconclusive
        }
    }
}
