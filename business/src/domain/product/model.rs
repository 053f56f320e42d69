use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::Price;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Price,
    pub offer_price: Price,
    /// Hosted image URLs, in the order the seller submitted the files.
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Price,
    pub offer_price: Price,
    pub images: Vec<String>,
}

impl Product {
    /// Every call yields a distinct record; listings are never deduplicated.
    pub fn new(props: NewProductProps) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            name: props.name,
            description: props.description,
            category: props.category,
            price: props.price,
            offer_price: props.offer_price,
            images: props.images,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository.
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        description: String,
        category: String,
        price: Price,
        offer_price: Price,
        images: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            category,
            price,
            offer_price,
            images,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewProductProps {
        NewProductProps {
            user_id: UserId::new("seller-1"),
            name: "Mug".to_string(),
            description: "Ceramic".to_string(),
            category: "Home".to_string(),
            price: Price::from(10.0),
            offer_price: Price::from(8.0),
            images: vec!["https://host/a.png".to_string()],
        }
    }

    #[test]
    fn should_generate_distinct_ids_for_identical_input() {
        let first = Product::new(props());
        let second = Product::new(props());

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn should_keep_image_order() {
        let mut p = props();
        p.images = vec!["https://host/b.png".into(), "https://host/a.png".into()];

        let product = Product::new(p);

        assert_eq!(product.images, vec!["https://host/b.png", "https://host/a.png"]);
    }
}
