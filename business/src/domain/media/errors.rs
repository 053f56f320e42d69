/// Errors raised while moving image bytes to the media host.
///
/// The `Display` form starts with a code-style identifier; anything after the
/// colon is diagnostic detail meant for logs.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("media.empty_batch")]
    EmptyBatch,
    #[error("media.not_configured")]
    NotConfigured,
    #[error("media.read_failed: {0}")]
    ReadFailed(String),
    #[error("media.upload_failed: {0}")]
    UploadFailed(String),
    #[error("media.rejected: {0}")]
    Rejected(String),
    #[error("media.delete_failed: {0}")]
    DeleteFailed(String),
    #[error("media.batch_item_failed: image {index}: {source}")]
    BatchItem {
        index: usize,
        #[source]
        source: Box<MediaError>,
    },
}

impl MediaError {
    /// Position of the failing image when the error aborted a batch.
    pub fn failed_index(&self) -> Option<usize> {
        match self {
            MediaError::BatchItem { index, .. } => Some(*index),
            _ => None,
        }
    }
}
