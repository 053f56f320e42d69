use async_trait::async_trait;

use crate::domain::media::model::ImageFile;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug)]
pub struct AddProductParams {
    /// `None` when the identity provider could not identify the caller.
    pub caller: Option<UserId>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Option<String>,
    pub offer_price: Option<String>,
    pub images: Vec<ImageFile>,
}

#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    async fn execute(&self, params: AddProductParams) -> Result<Product, ProductError>;
}
