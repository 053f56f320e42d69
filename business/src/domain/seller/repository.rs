use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Authorization port: decides whether a caller may sell products.
#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn is_seller(&self, user_id: &UserId) -> Result<bool, RepositoryError>;
}
