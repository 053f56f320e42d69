use async_trait::async_trait;

use super::errors::MediaError;
use super::model::{HostedMedia, UploadOptions};

/// Service port for the external media host.
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Stores the bytes and resolves once the host has confirmed the upload.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        options: &UploadOptions,
    ) -> Result<HostedMedia, MediaError>;

    /// Removes a previously uploaded resource.
    async fn delete(&self, media: &HostedMedia) -> Result<(), MediaError>;
}
