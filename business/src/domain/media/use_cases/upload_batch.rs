use async_trait::async_trait;

use crate::domain::media::errors::MediaError;
use crate::domain::media::model::{HostedMedia, ImageFile};

#[async_trait]
pub trait UploadBatchUseCase: Send + Sync {
    /// Uploads every file and returns the hosted descriptors in input order,
    /// or fails as a whole.
    async fn execute(&self, files: Vec<ImageFile>) -> Result<Vec<HostedMedia>, MediaError>;

    /// Best-effort removal of resources that will never be referenced.
    async fn discard(&self, uploaded: &[HostedMedia]);
}
