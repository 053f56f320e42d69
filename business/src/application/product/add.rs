use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::media::use_cases::upload_batch::UploadBatchUseCase;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::add::{AddProductParams, AddProductUseCase};
use crate::domain::product::value_objects::Price;
use crate::domain::seller::repository::SellerRepository;

pub struct AddProductUseCaseImpl {
    pub sellers: Arc<dyn SellerRepository>,
    pub uploads: Arc<dyn UploadBatchUseCase>,
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Product, ProductError> {
        let Some(user_id) = params.caller else {
            self.logger.warn("Add product denied: caller not identified");
            return Err(ProductError::NotAuthorized);
        };

        if !self.sellers.is_seller(&user_id).await? {
            self.logger
                .warn(&format!("Add product denied: {} is not a seller", user_id));
            return Err(ProductError::NotAuthorized);
        }

        self.logger.info(&format!(
            "Adding product '{}' for seller {} with {} image(s)",
            params.name,
            user_id,
            params.images.len()
        ));

        if params.images.is_empty() {
            self.logger.warn("Add product rejected: no files uploaded");
            return Err(ProductError::NoFilesProvided);
        }

        let price = Price::coerce(params.price.as_deref());
        let offer_price = Price::coerce(params.offer_price.as_deref());

        let uploaded = self.uploads.execute(params.images).await?;

        let product = Product::new(NewProductProps {
            user_id,
            name: params.name,
            description: params.description,
            category: params.category,
            price,
            offer_price,
            images: uploaded.iter().map(|m| m.secure_url.to_string()).collect(),
        });

        match self.repository.create(product).await {
            Ok(created) => {
                self.logger
                    .info(&format!("Product created with id: {}", created.id));
                Ok(created)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Persisting product failed: {}", err));
                self.uploads.discard(&uploaded).await;
                Err(err.into())
            }
        }
    }
}
