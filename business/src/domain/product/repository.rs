use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a new record and returns it as stored.
    async fn create(&self, product: Product) -> Result<Product, RepositoryError>;
}
