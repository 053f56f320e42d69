use async_trait::async_trait;
use chrono::{DateTime, Utc};
use poem_openapi::{Multipart, Object, types::multipart::Upload};

use business::domain::media::errors::MediaError;
use business::domain::media::model::{FileBlob, ImageFile};
use business::domain::product::model::Product;

pub const PRODUCT_CREATED: &str = "product.created";

/// Multipart form submitted by the seller dashboard
#[derive(Multipart)]
pub struct AddProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Numeric text; blank is 0 and unparsable text is stored as NaN
    pub price: Option<String>,
    #[oai(rename = "offerPrice")]
    pub offer_price: Option<String>,
    /// Repeated file part, one per image
    pub images: Vec<Upload>,
}

/// Multipart part whose bytes are read only when its upload starts.
pub struct UploadBlob(Upload);

#[async_trait]
impl FileBlob for UploadBlob {
    async fn read_bytes(self: Box<Self>) -> Result<Vec<u8>, MediaError> {
        self.0
            .into_vec()
            .await
            .map_err(|e| MediaError::ReadFailed(e.to_string()))
    }
}

impl UploadBlob {
    pub fn into_image_file(upload: Upload) -> ImageFile {
        let file_name = upload.file_name().map(str::to_string);
        let content_type = upload.content_type().map(str::to_string);
        ImageFile::new(file_name, content_type, UploadBlob(upload))
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    /// Seller who owns the listing
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub offer_price: f64,
    /// Hosted image URLs in submission order
    pub image: Vec<String>,
    /// Creation time as epoch milliseconds
    pub date: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            user_id: product.user_id.to_string(),
            name: product.name,
            description: product.description,
            category: product.category,
            price: product.price.value(),
            offer_price: product.offer_price.value(),
            image: product.images,
            date: product.created_at.timestamp_millis(),
            created_at: product.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddProductSuccess {
    pub success: bool,
    pub message: String,
    pub new_product: ProductResponse,
}

impl AddProductSuccess {
    pub fn created(product: Product) -> Self {
        Self {
            success: true,
            message: PRODUCT_CREATED.to_string(),
            new_product: product.into(),
        }
    }
}
