//! Catalog list controller.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::{error, info};

use crate::{
    domain::products::{ProductsRepository, models::Product},
    listing::{DeleteState, ListError, PageSize, view},
    navigation::{Navigator, Route},
};

/// Owns the server-synchronized product collection.
///
/// The filtered view is recomputed from the collection on every read and is
/// never stored, so it cannot fall out of step with the search term or page
/// size. The collection itself changes only when [`Self::load`] completes.
pub struct ListController {
    repository: Arc<dyn ProductsRepository>,
    navigator: Arc<dyn Navigator>,
    products: Vec<Product>,
    search_term: String,
    page_size: PageSize,
    delete: DeleteState,
}

impl Debug for ListController {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ListController")
            .field("products", &self.products.len())
            .field("search_term", &self.search_term)
            .field("page_size", &self.page_size)
            .field("delete", &self.delete)
            .finish_non_exhaustive()
    }
}

impl ListController {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            repository,
            navigator,
            products: Vec::new(),
            search_term: String::new(),
            page_size: PageSize::default(),
            delete: DeleteState::Idle,
        }
    }

    /// Replace the collection with a fresh fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::LoadFailed`] when the fetch fails; the previous
    /// collection is kept.
    pub async fn load(&mut self) -> Result<(), ListError> {
        let products = self.repository.list_products().await.map_err(|source| {
            error!("failed to load products: {source}");

            ListError::LoadFailed(source)
        })?;

        info!(count = products.len(), "loaded products");

        self.products = products;

        Ok(())
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
    }

    /// Matching records in collection order, capped at the page size.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        view::filter_products(&self.products, &self.search_term, self.page_size)
    }

    /// Number of records matching the search term, before the page-size cap.
    #[must_use]
    pub fn matching_count(&self) -> usize {
        view::matching(&self.products, &self.search_term).count()
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn delete_state(&self) -> &DeleteState {
        &self.delete
    }

    /// Ask for confirmation before deleting `product`. Nothing is sent yet.
    pub fn request_delete(&mut self, product: Product) {
        self.delete = DeleteState::PendingConfirmation(product);
    }

    /// Drop the pending request without touching the store.
    pub fn cancel_delete(&mut self) {
        if let DeleteState::PendingConfirmation(_) = self.delete {
            self.delete = DeleteState::Idle;
        }
    }

    /// Delete the pending record, then reload the collection.
    ///
    /// Returns `Ok(None)` when nothing was pending, `Ok(Some(product))` with
    /// the deleted record otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MutationFailed`] when the delete fails; the
    /// confirmation is cleared, the collection is left as it was, and the
    /// delete may be requested again. Returns [`ListError::LoadFailed`] when
    /// the delete succeeded but the reload did not.
    pub async fn confirm_delete(&mut self) -> Result<Option<Product>, ListError> {
        let product = match std::mem::take(&mut self.delete) {
            DeleteState::PendingConfirmation(product) => product,
            other => {
                self.delete = other;

                return Ok(None);
            }
        };

        self.delete = DeleteState::InFlight(product.clone());

        let deleted = self.repository.delete_product(&product.id).await;

        self.delete = DeleteState::Idle;

        if let Err(source) = deleted {
            error!(id = %product.id, "failed to delete product: {source}");

            return Err(ListError::MutationFailed {
                id: product.id,
                source,
            });
        }

        info!(id = %product.id, "deleted product");

        self.load().await?;

        Ok(Some(product))
    }

    /// Request the create view.
    pub fn add(&self) {
        self.navigator.navigate(Route::CreateProduct);
    }

    /// Request the edit view for `product`.
    pub fn edit(&self, product: &Product) {
        self.navigator
            .navigate(Route::EditProduct(product.id.clone()));
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};
    use testresult::TestResult;

    use crate::{
        domain::products::{MockProductsRepository, ProductsRepositoryError, models::ProductId},
        navigation::MockNavigator,
        test::{make_product, silent_navigator},
    };

    use super::*;

    fn two_products() -> Vec<Product> {
        vec![
            make_product("1", "Test Product"),
            make_product("2", "Another Product"),
        ]
    }

    fn names(controller: &ListController) -> Vec<&str> {
        controller
            .filtered_products()
            .into_iter()
            .map(|product| product.name.as_str())
            .collect()
    }

    async fn loaded(repository: MockProductsRepository) -> Result<ListController, ListError> {
        let mut controller = ListController::new(Arc::new(repository), silent_navigator());

        controller.load().await?;

        Ok(controller)
    }

    fn listing_once(products: Vec<Product>) -> MockProductsRepository {
        let mut repository = MockProductsRepository::new();

        repository
            .expect_list_products()
            .once()
            .return_once(move || Ok(products));

        repository
    }

    #[tokio::test]
    async fn load_derives_initial_view() -> TestResult {
        let controller = loaded(listing_once(two_products())).await?;

        assert_eq!(controller.products(), two_products().as_slice());
        assert_eq!(names(&controller), ["Test Product", "Another Product"]);
        assert_eq!(controller.matching_count(), 2);
        assert_eq!(controller.page_size(), PageSize::default());

        Ok(())
    }

    #[tokio::test]
    async fn load_failure_keeps_previous_collection() -> TestResult {
        let mut repository = MockProductsRepository::new();
        let mut sequence = Sequence::new();

        repository
            .expect_list_products()
            .once()
            .in_sequence(&mut sequence)
            .return_once(|| Ok(two_products()));
        repository
            .expect_list_products()
            .once()
            .in_sequence(&mut sequence)
            .return_once(|| Err(ProductsRepositoryError::UnexpectedResponse("down".into())));

        let mut controller = loaded(repository).await?;

        let result = controller.load().await;

        assert!(
            matches!(result, Err(ListError::LoadFailed(_))),
            "expected LoadFailed, got {result:?}"
        );
        assert_eq!(controller.products().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn search_filters_without_network_calls() -> TestResult {
        let mut controller = loaded(listing_once(two_products())).await?;

        controller.set_search_term("another");

        assert_eq!(names(&controller), ["Another Product"]);

        controller.set_search_term("another");

        assert_eq!(names(&controller), ["Another Product"]);
        assert_eq!(controller.products().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn page_size_caps_matches_and_count_reports_total() -> TestResult {
        let mut controller = loaded(listing_once(two_products())).await?;

        controller.set_page_size(PageSize::try_from(1)?);

        assert_eq!(names(&controller), ["Test Product"]);
        assert_eq!(controller.matching_count(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn cancel_delete_leaves_collection_unchanged() -> TestResult {
        let mut repository = listing_once(two_products());

        repository.expect_delete_product().never();

        let mut controller = loaded(repository).await?;
        let before = controller.products().to_vec();

        controller.request_delete(make_product("1", "Test Product"));

        assert!(controller.delete_state().needs_confirmation());

        controller.cancel_delete();

        assert!(controller.delete_state().is_idle());
        assert_eq!(controller.products(), before.as_slice());

        Ok(())
    }

    #[tokio::test]
    async fn confirm_delete_deletes_once_then_reloads_once() -> TestResult {
        let mut repository = MockProductsRepository::new();
        let mut sequence = Sequence::new();

        repository
            .expect_list_products()
            .once()
            .in_sequence(&mut sequence)
            .return_once(|| Ok(two_products()));
        repository
            .expect_delete_product()
            .once()
            .in_sequence(&mut sequence)
            .with(eq(ProductId::new("1")))
            .return_once(|_| Ok(()));
        repository
            .expect_list_products()
            .once()
            .in_sequence(&mut sequence)
            .return_once(|| Ok(vec![make_product("2", "Another Product")]));

        let mut controller = loaded(repository).await?;

        controller.request_delete(make_product("1", "Test Product"));

        let deleted = controller.confirm_delete().await?;

        assert_eq!(deleted.map(|product| product.id), Some(ProductId::new("1")));
        assert!(controller.delete_state().is_idle());
        assert_eq!(names(&controller), ["Another Product"]);

        Ok(())
    }

    #[tokio::test]
    async fn failed_delete_clears_confirmation_and_keeps_record() -> TestResult {
        let mut repository = listing_once(two_products());

        repository
            .expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsRepositoryError::UnexpectedResponse("boom".into())));

        let mut controller = loaded(repository).await?;

        controller.request_delete(make_product("1", "Test Product"));

        let result = controller.confirm_delete().await;

        assert!(
            matches!(&result, Err(ListError::MutationFailed { id, .. }) if id.as_str() == "1"),
            "expected MutationFailed, got {result:?}"
        );
        assert!(controller.delete_state().is_idle());
        assert_eq!(controller.products(), two_products().as_slice());

        Ok(())
    }

    #[tokio::test]
    async fn confirm_without_request_does_nothing() -> TestResult {
        let mut repository = listing_once(two_products());

        repository.expect_delete_product().never();

        let mut controller = loaded(repository).await?;

        assert_eq!(controller.confirm_delete().await?, None);

        Ok(())
    }

    #[test]
    fn add_and_edit_navigate() {
        let mut navigator = MockNavigator::new();
        let mut sequence = Sequence::new();

        navigator
            .expect_navigate()
            .once()
            .in_sequence(&mut sequence)
            .with(eq(Route::CreateProduct))
            .return_const(());
        navigator
            .expect_navigate()
            .once()
            .in_sequence(&mut sequence)
            .with(eq(Route::EditProduct(ProductId::new("1"))))
            .return_const(());

        let controller = ListController::new(
            Arc::new(MockProductsRepository::new()),
            Arc::new(navigator),
        );

        controller.add();
        controller.edit(&make_product("1", "Test Product"));
    }
}
