use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::Price;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub offer_price: f64,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.name,
            self.description,
            self.category,
            Price::from(self.price),
            Price::from(self.offer_price),
            self.images,
            self.created_at,
        )
    }
}
