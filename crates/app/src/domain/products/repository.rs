//! Products repository.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::products::{
    errors::ProductsRepositoryError,
    models::{Product, ProductId},
};

/// Typed access to the remote product store.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsRepositoryError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductsRepositoryError>;

    /// Creates a new product.
    async fn create_product(&self, product: Product) -> Result<Product, ProductsRepositoryError>;

    /// Replaces the product stored under `id`.
    async fn update_product(
        &self,
        id: &ProductId,
        product: Product,
    ) -> Result<Product, ProductsRepositoryError>;

    /// Deletes the product stored under `id`.
    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductsRepositoryError>;

    /// Whether a product with `id` already exists.
    async fn check_id_exists(&self, id: &ProductId) -> Result<bool, ProductsRepositoryError>;
}
