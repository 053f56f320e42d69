use crate::domain::errors::RepositoryError;
use crate::domain::media::errors::MediaError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("seller.not_authorized")]
    NotAuthorized,
    #[error("product.no_files_uploaded")]
    NoFilesProvided,
    #[error("media.upload_failed")]
    Upload(#[from] MediaError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
