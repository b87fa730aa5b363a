//! Form controller.
//!
//! Drives a product record through `Loading -> Editing -> Submitting ->
//! Submitted`, feeding every edit into the [`ValidationEngine`]. Uniqueness
//! checks run as spawned tasks so edits are never blocked by the network; a
//! newer edit aborts the previous check, and late results are additionally
//! discarded by the ticket comparison in the uniqueness tracker.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::{
    domain::products::{
        ProductsRepository, ProductsRepositoryError,
        models::{Product, ProductDraft, ProductId},
    },
    form::FormError,
    navigation::{Navigator, Route},
    validation::{
        CheckTicket, ErrorReason, ErrorSet, Field, FormState, Resolution, UniquenessOutcome,
        ValidationEngine, Validity,
    },
};

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Fetching the record to edit; nothing is editable.
    Loading,

    /// Fields are mutable and validated live.
    Editing,

    /// A create or update call is in flight.
    Submitting,

    /// The record was saved and navigation was requested.
    Submitted,

    /// The record to edit could not be loaded.
    Unavailable,
}

/// Result of a submit attempt that did not fail in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was invalid; every field is now touched and nothing was sent.
    Invalid,

    /// The store accepted the record.
    Submitted(Product),
}

struct InFlightCheck {
    ticket: CheckTicket,
    handle: JoinHandle<UniquenessOutcome>,
}

pub struct FormController {
    repository: Arc<dyn ProductsRepository>,
    navigator: Arc<dyn Navigator>,
    engine: ValidationEngine,
    mode: FormMode,
    phase: FormPhase,
    state: FormState,
    in_flight: Option<InFlightCheck>,
}

impl Debug for FormController {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FormController")
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl FormController {
    /// A controller using the product form rules. Call [`Self::initialize`] before use.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>, navigator: Arc<dyn Navigator>) -> Self {
        let engine = ValidationEngine::for_products(Arc::clone(&repository));

        Self::with_engine(repository, navigator, engine)
    }

    #[must_use]
    pub fn with_engine(
        repository: Arc<dyn ProductsRepository>,
        navigator: Arc<dyn Navigator>,
        engine: ValidationEngine,
    ) -> Self {
        Self {
            repository,
            navigator,
            engine,
            mode: FormMode::Create,
            phase: FormPhase::Loading,
            state: FormState::default(),
            in_flight: None,
        }
    }

    /// Start a blank create form, or fetch and lock the record to edit.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::RecordNotFound`] or [`FormError::LoadFailed`] when
    /// the record to edit cannot be fetched; the form is then unavailable.
    pub async fn initialize(&mut self, mode: FormMode) -> Result<(), FormError> {
        self.mode = mode;

        self.clear();

        match self.mode.clone() {
            FormMode::Create => {
                self.phase = FormPhase::Editing;

                Ok(())
            }
            FormMode::Edit(id) => self.load(&id).await,
        }
    }

    /// Apply a user edit and re-run the rules it affects.
    ///
    /// # Errors
    ///
    /// Returns an error when the form is not in the editing phase or the field
    /// is locked.
    pub fn on_field_change(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if self.phase != FormPhase::Editing {
            return Err(FormError::NotEditable(self.phase));
        }

        if self.is_locked(field) {
            return Err(FormError::FieldLocked(field));
        }

        let value = value.into();
        let errors = self.engine.validate_field(field, &value);

        let state = self.state.field_mut(field);
        state.set_value(value);
        state.touch();
        state.set_errors(errors);

        if field == Field::Id {
            self.restart_uniqueness_check();
        }

        if field.is_date() {
            self.revalidate_cross_field();
        }

        Ok(())
    }

    /// Validate and, when valid, save the record.
    ///
    /// Waits for an outstanding uniqueness check first.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MutationFailed`] when the store rejects the save;
    /// the form goes back to editing with its input unchanged.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if self.phase != FormPhase::Editing {
            return Err(FormError::NotEditable(self.phase));
        }

        self.settle_uniqueness().await;

        if !self.engine.is_form_valid(&self.state) {
            self.state.touch_all();

            return Ok(SubmitOutcome::Invalid);
        }

        let product = match Product::try_from(&self.state.values()) {
            Ok(product) => product,
            Err(invalid) => {
                debug!("form passed validation but is not a product: {invalid}");

                self.state.touch_all();

                return Ok(SubmitOutcome::Invalid);
            }
        };

        self.phase = FormPhase::Submitting;

        match self.save(product).await {
            Ok(saved) => {
                info!(id = %saved.id, "product saved");

                self.phase = FormPhase::Submitted;
                self.navigator.navigate(Route::ProductList);

                Ok(SubmitOutcome::Submitted(saved))
            }
            Err(source) => {
                error!("failed to save product: {source}");

                self.phase = FormPhase::Editing;

                Err(FormError::MutationFailed(source))
            }
        }
    }

    /// Clear every field. Edit forms are re-populated from the store.
    ///
    /// # Errors
    ///
    /// Returns an error when re-fetching the edited record fails.
    pub async fn reset(&mut self) -> Result<(), FormError> {
        self.clear();

        match self.mode.clone() {
            FormMode::Create => {
                self.phase = FormPhase::Editing;

                Ok(())
            }
            FormMode::Edit(id) => self.load(&id).await,
        }
    }

    /// Apply the outstanding uniqueness check if it has finished, without waiting.
    pub async fn poll_uniqueness(&mut self) -> Option<Resolution> {
        let finished = self
            .in_flight
            .as_ref()
            .is_some_and(|check| check.handle.is_finished());

        if !finished {
            return None;
        }

        let check = self.in_flight.take()?;

        Some(self.finish_check(check).await)
    }

    /// Wait for the outstanding uniqueness check, if any, and apply it.
    pub async fn settle_uniqueness(&mut self) -> Option<Resolution> {
        let check = self.in_flight.take()?;

        Some(self.finish_check(check).await)
    }

    /// Apply a uniqueness result for `ticket`, discarding it if stale.
    pub fn apply_uniqueness(
        &mut self,
        ticket: &CheckTicket,
        outcome: UniquenessOutcome,
    ) -> Resolution {
        let current = self.state.field(Field::Id).value().to_string();

        let resolution = self
            .state
            .uniqueness_mut()
            .resolve(ticket, outcome, &current);

        if resolution == Resolution::Applied(UniquenessOutcome::Taken) {
            self.state
                .field_mut(Field::Id)
                .errors_mut()
                .insert(ErrorReason::IdAlreadyExists);
        }

        resolution
    }

    #[must_use]
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn values(&self) -> ProductDraft {
        self.state.values()
    }

    #[must_use]
    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    /// Whether edits to `field` are refused. Only the id of an edited record is locked.
    #[must_use]
    pub fn is_locked(&self, field: Field) -> bool {
        field == Field::Id && matches!(self.mode, FormMode::Edit(_))
    }

    /// All active errors of `field`, touched or not.
    #[must_use]
    pub fn errors(&self, field: Field) -> &ErrorSet {
        self.state.field(field).errors()
    }

    /// Errors of `field` worth showing: none until the field has been touched.
    #[must_use]
    pub fn visible_errors(&self, field: Field) -> Option<&ErrorSet> {
        let state = self.state.field(field);

        (state.is_touched() && !state.errors().is_empty()).then(|| state.errors())
    }

    #[must_use]
    pub fn field_validity(&self, field: Field) -> Validity {
        self.state.field_validity(field)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.engine.is_form_valid(&self.state)
    }

    async fn load(&mut self, id: &ProductId) -> Result<(), FormError> {
        self.phase = FormPhase::Loading;

        match self.repository.get_product(id).await {
            Ok(product) => {
                info!(%id, "loaded product for editing");

                self.populate(&ProductDraft::from(&product));
                self.phase = FormPhase::Editing;

                Ok(())
            }
            Err(ProductsRepositoryError::NotFound) => {
                error!(%id, "product to edit not found");

                self.phase = FormPhase::Unavailable;

                Err(FormError::RecordNotFound(id.clone()))
            }
            Err(source) => {
                error!(%id, "failed to load product: {source}");

                self.phase = FormPhase::Unavailable;

                Err(FormError::LoadFailed {
                    id: id.clone(),
                    source,
                })
            }
        }
    }

    async fn save(&self, product: Product) -> Result<Product, ProductsRepositoryError> {
        match &self.mode {
            FormMode::Create => self.repository.create_product(product).await,
            FormMode::Edit(id) => self.repository.update_product(id, product).await,
        }
    }

    fn clear(&mut self) {
        self.abort_check();
        self.state.reset();
        self.revalidate_all();
    }

    fn populate(&mut self, draft: &ProductDraft) {
        let values = [
            (Field::Id, &draft.id),
            (Field::Name, &draft.name),
            (Field::Description, &draft.description),
            (Field::Logo, &draft.logo),
            (Field::DateRelease, &draft.date_release),
            (Field::DateRevision, &draft.date_revision),
        ];

        for (field, value) in values {
            self.state.field_mut(field).set_value(value.clone());
        }

        self.revalidate_all();
    }

    /// Locked fields are excluded from validation.
    fn revalidate_all(&mut self) {
        for field in Field::ALL {
            let errors = if self.is_locked(field) {
                ErrorSet::new()
            } else {
                self.engine
                    .validate_field(field, self.state.field(field).value())
            };

            self.state.field_mut(field).set_errors(errors);
        }

        self.revalidate_cross_field();
    }

    fn revalidate_cross_field(&mut self) {
        let errors = self.engine.validate_cross_field(&self.state.values());

        self.state.set_form_errors(errors);
    }

    fn restart_uniqueness_check(&mut self) {
        self.abort_check();

        let id = self.state.field(Field::Id);

        if self.mode != FormMode::Create || !id.errors().is_empty() {
            self.state.uniqueness_mut().clear();

            return;
        }

        let value = id.value().to_string();
        let ticket = self.state.uniqueness_mut().begin(value.clone());

        match Handle::try_current() {
            Ok(runtime) => {
                let handle = runtime.spawn(self.engine.unique_check(value));

                self.in_flight = Some(InFlightCheck { ticket, handle });
            }
            Err(source) => {
                warn!("no async runtime for uniqueness check, not blocking submission: {source}");

                self.apply_uniqueness(&ticket, UniquenessOutcome::Inconclusive);
            }
        }
    }

    fn abort_check(&mut self) {
        if let Some(check) = self.in_flight.take() {
            check.handle.abort();
        }
    }

    async fn finish_check(&mut self, check: InFlightCheck) -> Resolution {
        let outcome = check.handle.await.unwrap_or_else(|source| {
            warn!("uniqueness check did not complete, not blocking submission: {source}");

            UniquenessOutcome::Inconclusive
        });

        self.apply_uniqueness(&check.ticket, outcome)
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        self.abort_check();
    }
}
