use std::sync::Arc;

use cloudinary::client::CloudinaryClient;
use cloudinary::media_host::CloudinaryMediaHost;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::seller::repository::SellerRepositoryPostgres;

use business::application::media::upload_batch::UploadBatchUseCaseImpl;
use business::application::product::add::AddProductUseCaseImpl;

use crate::api::security::FirebaseIdentityProvider;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let seller_repository = Arc::new(SellerRepositoryPostgres::new(pool));
        let media_host = Arc::new(CloudinaryMediaHost::new(CloudinaryClient::new(
            config.cloudinary.credentials.clone(),
        )));
        let identity = Arc::new(FirebaseIdentityProvider::new(&config.firebase));

        // Use cases
        let upload_batch_use_case = Arc::new(UploadBatchUseCaseImpl {
            host: media_host,
            logger: logger.clone(),
            max_in_flight: config.upload.max_concurrency,
        });
        let add_use_case = Arc::new(AddProductUseCaseImpl {
            sellers: seller_repository,
            uploads: upload_batch_use_case,
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(identity, add_use_case);

        Self {
            health_api,
            product_api,
        }
    }
}
