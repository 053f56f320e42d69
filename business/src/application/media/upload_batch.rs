use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::domain::logger::Logger;
use crate::domain::media::errors::MediaError;
use crate::domain::media::model::{HostedMedia, ImageFile, UploadOptions};
use crate::domain::media::services::MediaHost;
use crate::domain::media::use_cases::upload_batch::UploadBatchUseCase;

pub const DEFAULT_MAX_IN_FLIGHT: usize = 4;

/// Uploads a gallery concurrently, at most `max_in_flight` images at a time.
///
/// Every upload is allowed to settle before the batch is judged. A single
/// failure voids the whole batch: the siblings that made it to the host are
/// deleted again and the failure with the lowest input index is returned.
pub struct UploadBatchUseCaseImpl {
    pub host: Arc<dyn MediaHost>,
    pub logger: Arc<dyn Logger>,
    pub max_in_flight: usize,
}

impl UploadBatchUseCaseImpl {
    fn limit(&self) -> usize {
        self.max_in_flight.max(1)
    }

    async fn upload_one(
        &self,
        index: usize,
        total: usize,
        file: ImageFile,
    ) -> Result<HostedMedia, MediaError> {
        let position = index + 1;
        let ImageFile {
            file_name, blob, ..
        } = file;

        let bytes = blob.read_bytes().await.inspect_err(|err| {
            self.logger.error(&format!(
                "Reading image {}/{} failed: {}",
                position, total, err
            ))
        })?;

        self.logger.info(&format!(
            "Uploading image {}/{} ({} bytes)",
            position,
            total,
            bytes.len()
        ));

        match self.host.upload(bytes, &UploadOptions::auto(file_name)).await {
            Ok(media) => {
                self.logger.info(&format!(
                    "Image {}/{} uploaded: {}",
                    position, total, media.secure_url
                ));
                Ok(media)
            }
            Err(err) => {
                self.logger.error(&format!(
                    "Uploading image {}/{} failed: {}",
                    position, total, err
                ));
                Err(err)
            }
        }
    }
}

#[async_trait]
impl UploadBatchUseCase for UploadBatchUseCaseImpl {
    async fn execute(&self, files: Vec<ImageFile>) -> Result<Vec<HostedMedia>, MediaError> {
        if files.is_empty() {
            return Err(MediaError::EmptyBatch);
        }

        let total = files.len();
        let limit = self.limit();
        self.logger.debug(&format!(
            "Starting upload batch of {} image(s), {} in flight at most",
            total, limit
        ));

        // Completions arrive in any order; the index ties each one back to its input.
        let mut outcomes: Vec<(usize, Result<HostedMedia, MediaError>)> =
            stream::iter(files.into_iter().enumerate())
                .map(|(index, file)| async move { (index, self.upload_one(index, total, file).await) })
                .buffer_unordered(limit)
                .collect()
                .await;
        outcomes.sort_unstable_by_key(|(index, _)| *index);

        let mut uploaded = Vec::with_capacity(total);
        let mut first_failure = None;
        for (index, outcome) in outcomes {
            match outcome {
                Ok(media) => uploaded.push(media),
                Err(err) if first_failure.is_none() => first_failure = Some((index, err)),
                Err(_) => {}
            }
        }

        match first_failure {
            None => Ok(uploaded),
            Some((index, cause)) => {
                self.logger.warn(&format!(
                    "Upload batch aborted by image {}/{}; discarding {} uploaded sibling(s)",
                    index + 1,
                    total,
                    uploaded.len()
                ));
                self.discard(&uploaded).await;
                Err(MediaError::BatchItem {
                    index,
                    source: Box::new(cause),
                })
            }
        }
    }

    async fn discard(&self, uploaded: &[HostedMedia]) {
        stream::iter(uploaded.iter().cloned())
            .map(|media| async move {
                let result = self.host.delete(&media).await;
                (media, result)
            })
            .buffer_unordered(self.limit())
            .for_each(|(media, result)| async move {
                match result {
                    Ok(()) => self
                        .logger
                        .debug(&format!("Discarded orphaned upload {}", media.public_id)),
                    Err(err) => self.logger.warn(&format!(
                        "Could not discard orphaned upload {}: {}",
                        media.public_id, err
                    )),
                }
            })
            .await;
    }
}
