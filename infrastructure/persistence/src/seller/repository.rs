use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::seller::repository::SellerRepository;
use business::domain::shared::value_objects::UserId;

/// Sellers are the users listed in the `sellers` table.
pub struct SellerRepositoryPostgres {
    pool: PgPool,
}

impl SellerRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SellerRepository for SellerRepositoryPostgres {
    async fn is_seller(&self, user_id: &UserId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM sellers WHERE user_id = $1)")
            .bind(user_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Seller lookup failed");
                RepositoryError::DatabaseError
            })
    }
}
