use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (id, user_id, name, description, category, price, offer_price, images, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, name, description, category, price, offer_price, images, created_at"#,
        )
        .bind(product.id)
        .bind(product.user_id.as_str())
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.price.value())
        .bind(product.offer_price.value())
        .bind(&product.images)
        .bind(product.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, product_id = %product.id, "Inserting product failed");
            RepositoryError::DatabaseError
        })?;

        Ok(entity.into_domain())
    }
}
