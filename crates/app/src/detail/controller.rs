//! Product detail controller.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::{error, info};

use crate::{
    detail::DetailError,
    domain::products::{
        ProductsRepository, ProductsRepositoryError,
        models::{Product, ProductId},
    },
    listing::DeleteState,
    navigation::{Navigator, Route},
};

pub struct DetailController {
    repository: Arc<dyn ProductsRepository>,
    navigator: Arc<dyn Navigator>,
    product: Option<Product>,
    delete: DeleteState,
}

impl Debug for DetailController {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DetailController")
            .field("product", &self.product)
            .field("delete", &self.delete)
            .finish_non_exhaustive()
    }
}

impl DetailController {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            repository,
            navigator,
            product: None,
            delete: DeleteState::Idle,
        }
    }

    /// Fetch the record to show.
    ///
    /// # Errors
    ///
    /// Returns [`DetailError::RecordNotFound`] when the store has no such
    /// record, [`DetailError::LoadFailed`] for any other failure.
    pub async fn load(&mut self, id: &ProductId) -> Result<&Product, DetailError> {
        self.product = None;
        self.delete = DeleteState::Idle;

        let product = self
            .repository
            .get_product(id)
            .await
            .map_err(|source| match source {
                ProductsRepositoryError::NotFound => DetailError::RecordNotFound(id.clone()),
                source => {
                    error!(%id, "failed to load product: {source}");

                    DetailError::LoadFailed {
                        id: id.clone(),
                        source,
                    }
                }
            })?;

        info!(%id, "loaded product");

        Ok(self.product.insert(product))
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    #[must_use]
    pub fn delete_state(&self) -> &DeleteState {
        &self.delete
    }

    /// Request the edit view for the loaded record.
    ///
    /// # Errors
    ///
    /// Returns [`DetailError::NotLoaded`] when nothing has been loaded.
    pub fn edit(&self) -> Result<(), DetailError> {
        let product = self.product.as_ref().ok_or(DetailError::NotLoaded)?;

        self.navigator
            .navigate(Route::EditProduct(product.id.clone()));

        Ok(())
    }

    /// Ask for confirmation before deleting the loaded record.
    ///
    /// # Errors
    ///
    /// Returns [`DetailError::NotLoaded`] when nothing has been loaded.
    pub fn request_delete(&mut self) -> Result<(), DetailError> {
        let product = self.product.clone().ok_or(DetailError::NotLoaded)?;

        self.delete = DeleteState::PendingConfirmation(product);

        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        if let DeleteState::PendingConfirmation(_) = self.delete {
            self.delete = DeleteState::Idle;
        }
    }

    /// Delete the pending record and go back to the list.
    ///
    /// Returns `Ok(false)` when no delete was pending.
    ///
    /// # Errors
    ///
    /// Returns [`DetailError::MutationFailed`] when the delete fails; the
    /// record stays loaded and the confirmation is cleared.
    pub async fn confirm_delete(&mut self) -> Result<bool, DetailError> {
        let product = match std::mem::take(&mut self.delete) {
            DeleteState::PendingConfirmation(product) => product,
            other => {
                self.delete = other;

                return Ok(false);
            }
        };

        self.delete = DeleteState::InFlight(product.clone());

        let deleted = self.repository.delete_product(&product.id).await;

        self.delete = DeleteState::Idle;

        if let Err(source) = deleted {
            error!(id = %product.id, "failed to delete product: {source}");

            return Err(DetailError::MutationFailed {
                id: product.id,
                source,
            });
        }

        info!(id = %product.id, "deleted product");

        self.product = None;
        self.navigator.navigate(Route::ProductList);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use testresult::TestResult;

    use crate::{
        domain::products::MockProductsRepository,
        navigation::MockNavigator,
        test::{make_product, silent_navigator},
    };

    use super::*;

    fn serving(product: Product) -> MockProductsRepository {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_get_product()
            .once()
            .with(eq(product.id.clone()))
            .return_once(move |_| Ok(product));

        repository
    }

    fn navigating_to(route: Route) -> Arc<dyn Navigator> {
        let mut navigator = MockNavigator::new();

        navigator
            .expect_navigate()
            .once()
            .with(eq(route))
            .return_const(());

        Arc::new(navigator)
    }

    #[tokio::test]
    async fn load_shows_the_record() -> TestResult {
        let repository = serving(make_product("123", "Test Product"));
        let mut controller = DetailController::new(Arc::new(repository), silent_navigator());

        let product = controller.load(&ProductId::new("123")).await?;

        assert_eq!(product.name, "Test Product");
        assert_eq!(
            controller.product().map(|product| product.id.as_str()),
            Some("123")
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_record_is_not_found() -> TestResult {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsRepositoryError::NotFound));

        let mut controller = DetailController::new(Arc::new(repository), silent_navigator());

        let result = controller.load(&ProductId::new("nope")).await;

        assert!(
            matches!(&result, Err(DetailError::RecordNotFound(id)) if id.as_str() == "nope"),
            "expected RecordNotFound, got {result:?}"
        );
        assert_eq!(controller.product(), None);

        Ok(())
    }

    #[tokio::test]
    async fn edit_navigates_to_edit_view() -> TestResult {
        let repository = serving(make_product("123", "Test Product"));
        let mut controller = DetailController::new(
            Arc::new(repository),
            navigating_to(Route::EditProduct(ProductId::new("123"))),
        );

        controller.load(&ProductId::new("123")).await?;
        controller.edit()?;

        Ok(())
    }

    #[test]
    fn edit_before_load_is_refused() {
        let controller =
            DetailController::new(Arc::new(MockProductsRepository::new()), silent_navigator());

        assert!(matches!(controller.edit(), Err(DetailError::NotLoaded)));
    }

    #[tokio::test]
    async fn confirmed_delete_returns_to_list() -> TestResult {
        let mut repository = serving(make_product("123", "Test Product"));

        repository
            .expect_delete_product()
            .once()
            .with(eq(ProductId::new("123")))
            .return_once(|_| Ok(()));

        let mut controller =
            DetailController::new(Arc::new(repository), navigating_to(Route::ProductList));

        controller.load(&ProductId::new("123")).await?;
        controller.request_delete()?;

        assert!(controller.delete_state().needs_confirmation());
        assert!(controller.confirm_delete().await?);
        assert!(controller.delete_state().is_idle());

        Ok(())
    }

    #[tokio::test]
    async fn cancelled_delete_sends_nothing() -> TestResult {
        let mut repository = serving(make_product("123", "Test Product"));

        repository.expect_delete_product().never();

        let mut controller = DetailController::new(Arc::new(repository), silent_navigator());

        controller.load(&ProductId::new("123")).await?;
        controller.request_delete()?;
        controller.cancel_delete();

        assert!(!controller.confirm_delete().await?);
        assert!(controller.product().is_some());

        Ok(())
    }

    #[tokio::test]
    async fn failed_delete_keeps_record_and_stays() -> TestResult {
        let mut repository = serving(make_product("123", "Test Product"));

        repository
            .expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsRepositoryError::UnexpectedResponse("boom".into())));

        let mut controller = DetailController::new(Arc::new(repository), silent_navigator());

        controller.load(&ProductId::new("123")).await?;
        controller.request_delete()?;

        let result = controller.confirm_delete().await;

        assert!(
            matches!(result, Err(DetailError::MutationFailed { .. })),
            "expected MutationFailed, got {result:?}"
        );
        assert!(controller.delete_state().is_idle());
        assert!(controller.product().is_some());

        Ok(())
    }
}
