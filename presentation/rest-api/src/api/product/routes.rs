use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::add::{AddProductParams, AddProductUseCase};

use crate::api::error::{ErrorEnvelope, IntoErrorResponse};
use crate::api::product::dto::{AddProductForm, AddProductSuccess, UploadBlob};
use crate::api::security::{IdentityProvider, bearer_token};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    identity: Arc<dyn IdentityProvider>,
    add_use_case: Arc<dyn AddProductUseCase>,
}

impl ProductApi {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        add_use_case: Arc<dyn AddProductUseCase>,
    ) -> Self {
        Self {
            identity,
            add_use_case,
        }
    }
}

/// Seller product API
#[OpenApi]
impl ProductApi {
    /// Add a product
    ///
    /// Uploads every image in the form to the media host and stores the
    /// product with the hosted URLs, in submission order. Any failed upload
    /// fails the whole request and nothing is stored.
    #[oai(path = "/api/product/add", method = "post", tag = "ApiTags::Products")]
    async fn add_product(&self, req: &Request, form: AddProductForm) -> AddProductResponse {
        let caller = self.identity.identify(bearer_token(req)).await;

        let params = AddProductParams {
            caller,
            name: form.name.unwrap_or_default(),
            description: form.description.unwrap_or_default(),
            category: form.category.unwrap_or_default(),
            price: form.price,
            offer_price: form.offer_price,
            images: form.images.into_iter().map(UploadBlob::into_image_file).collect(),
        };

        match self.add_use_case.execute(params).await {
            Ok(product) => AddProductResponse::Created(Json(AddProductSuccess::created(product))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddProductResponse::BadRequest(json),
                    403 => AddProductResponse::Forbidden(json),
                    502 => AddProductResponse::BadGateway(json),
                    _ => AddProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 201)]
    Created(Json<AddProductSuccess>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorEnvelope>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use poem::http::StatusCode;
    use poem::test::{TestClient, TestForm, TestFormField};
    use poem::{EndpointExt, Route};
    use poem_openapi::OpenApiService;
    use url::Url;

    use business::application::media::upload_batch::UploadBatchUseCaseImpl;
    use business::application::product::add::AddProductUseCaseImpl;
    use business::domain::errors::RepositoryError;
    use business::domain::media::errors::MediaError;
    use business::domain::media::model::{HostedMedia, ResourceType, UploadOptions};
    use business::domain::media::services::MediaHost;
    use business::domain::product::model::Product;
    use business::domain::product::repository::ProductRepository;
    use business::domain::seller::repository::SellerRepository;
    use business::domain::shared::value_objects::UserId;
    use logger::TracingLogger;

    use crate::api::error::unclassified_error;

    const SELLER_TOKEN: &str = "seller-token";

    struct StaticIdentity;

    #[async_trait]
    impl IdentityProvider for StaticIdentity {
        async fn identify(&self, bearer_token: Option<&str>) -> Option<UserId> {
            match bearer_token {
                Some(SELLER_TOKEN) => Some(UserId::new("seller-1")),
                Some(_) => Some(UserId::new("shopper-1")),
                None => None,
            }
        }
    }

    struct InMemorySellers(HashSet<String>);

    #[async_trait]
    impl SellerRepository for InMemorySellers {
        async fn is_seller(&self, user_id: &UserId) -> Result<bool, RepositoryError> {
            Ok(self.0.contains(user_id.as_str()))
        }
    }

    /// Hosts each file under its own name; names listed in `failing` are refused.
    #[derive(Default)]
    struct EchoHost {
        failing: HashSet<String>,
        uploads: AtomicUsize,
        deletes: AtomicUsize,
    }

    #[async_trait]
    impl MediaHost for EchoHost {
        async fn upload(
            &self,
            _bytes: Vec<u8>,
            options: &UploadOptions,
        ) -> Result<HostedMedia, MediaError> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            let name = options.file_name.clone().unwrap_or_default();
            if self.failing.contains(&name) {
                return Err(MediaError::UploadFailed("network error".to_string()));
            }
            Ok(HostedMedia {
                public_id: name.clone(),
                secure_url: Url::parse(&format!("https://host/{name}")).unwrap(),
                resource_type: ResourceType::Image,
                format: None,
                bytes: None,
            })
        }

        async fn delete(&self, _media: &HostedMedia) -> Result<(), MediaError> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingRepo {
        stored: Mutex<Vec<Product>>,
    }

    #[async_trait]
    impl ProductRepository for RecordingRepo {
        async fn create(&self, product: Product) -> Result<Product, RepositoryError> {
            self.stored.lock().unwrap().push(product.clone());
            Ok(product)
        }
    }

    fn client(host: Arc<EchoHost>, repo: Arc<RecordingRepo>) -> TestClient<impl poem::Endpoint> {
        let logger = Arc::new(TracingLogger);
        let uploads = Arc::new(UploadBatchUseCaseImpl {
            host,
            logger: logger.clone(),
            max_in_flight: 2,
        });
        let add_use_case = Arc::new(AddProductUseCaseImpl {
            sellers: Arc::new(InMemorySellers(HashSet::from(["seller-1".to_string()]))),
            uploads,
            repository: repo,
            logger,
        });
        let api = ProductApi::new(Arc::new(StaticIdentity), add_use_case);
        let service = OpenApiService::new(api, "Seller Upload API", "test");

        TestClient::new(Route::new().nest("/", service).catch_all_error(unclassified_error))
    }

    fn mug_form(images: &[&str]) -> TestForm {
        let mut form = TestForm::new()
            .field(TestFormField::text("Mug").name("name"))
            .field(TestFormField::text("Ceramic").name("description"))
            .field(TestFormField::text("Home").name("category"))
            .field(TestFormField::text("10").name("price"))
            .field(TestFormField::text("8").name("offerPrice"));
        for image in images {
            form = form.field(
                TestFormField::bytes(image.as_bytes().to_vec())
                    .name("images")
                    .filename(*image),
            );
        }
        form
    }

    async fn json_body(resp: poem::test::TestResponse) -> serde_json::Value {
        resp.0.into_body().into_json().await.unwrap()
    }

    #[tokio::test]
    async fn should_create_product_with_ordered_images_when_seller_uploads() {
        let host = Arc::new(EchoHost::default());
        let repo = Arc::new(RecordingRepo::default());
        let cli = client(host.clone(), repo.clone());

        let resp = cli
            .post("/api/product/add")
            .header("authorization", format!("Bearer {SELLER_TOKEN}"))
            .multipart(mug_form(&["a.png", "b.png"]))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let body = json_body(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "product.created");
        assert_eq!(body["newProduct"]["name"], "Mug");
        assert_eq!(body["newProduct"]["userId"], "seller-1");
        assert_eq!(body["newProduct"]["price"], 10.0);
        assert_eq!(body["newProduct"]["offerPrice"], 8.0);
        assert_eq!(
            body["newProduct"]["image"],
            serde_json::json!(["https://host/a.png", "https://host/b.png"])
        );
        assert_eq!(repo.stored.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_deny_without_uploading_when_bearer_token_is_missing() {
        let host = Arc::new(EchoHost::default());
        let repo = Arc::new(RecordingRepo::default());
        let cli = client(host.clone(), repo.clone());

        let resp = cli
            .post("/api/product/add")
            .multipart(mug_form(&["a.png"]))
            .send()
            .await;

        resp.assert_status(StatusCode::FORBIDDEN);
        let body = json_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "seller.not_authorized");
        assert_eq!(host.uploads.load(Ordering::SeqCst), 0);
        assert!(repo.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_deny_when_caller_is_not_a_seller() {
        let host = Arc::new(EchoHost::default());
        let cli = client(host.clone(), Arc::new(RecordingRepo::default()));

        let resp = cli
            .post("/api/product/add")
            .header("authorization", "Bearer shopper-token")
            .multipart(mug_form(&["a.png"]))
            .send()
            .await;

        resp.assert_status(StatusCode::FORBIDDEN);
        assert_eq!(host.uploads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_reject_when_no_images_are_attached() {
        let host = Arc::new(EchoHost::default());
        let repo = Arc::new(RecordingRepo::default());
        let cli = client(host.clone(), repo.clone());

        let resp = cli
            .post("/api/product/add")
            .header("authorization", format!("Bearer {SELLER_TOKEN}"))
            .multipart(mug_form(&[]))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["message"], "product.no_files_uploaded");
        assert!(repo.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_fail_without_storing_when_one_upload_fails() {
        let host = Arc::new(EchoHost {
            failing: HashSet::from(["b.png".to_string()]),
            ..EchoHost::default()
        });
        let repo = Arc::new(RecordingRepo::default());
        let cli = client(host.clone(), repo.clone());

        let resp = cli
            .post("/api/product/add")
            .header("authorization", format!("Bearer {SELLER_TOKEN}"))
            .multipart(mug_form(&["a.png", "b.png"]))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_GATEWAY);
        let body = json_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "media.upload_failed");
        assert!(repo.stored.lock().unwrap().is_empty());
        assert_eq!(host.deletes.load(Ordering::SeqCst), 1);
    }
}
