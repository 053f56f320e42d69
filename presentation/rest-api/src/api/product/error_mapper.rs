use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorEnvelope, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorEnvelope>) {
        let status = match &self {
            ProductError::NotAuthorized => StatusCode::FORBIDDEN,
            ProductError::NoFilesProvided => StatusCode::BAD_REQUEST,
            ProductError::Upload(_) => StatusCode::BAD_GATEWAY,
            ProductError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorEnvelope::failure(self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::media::errors::MediaError;

    #[test]
    fn should_map_denial_to_forbidden() {
        let (status, body) = ProductError::NotAuthorized.into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(!body.0.success);
        assert_eq!(body.0.message, "seller.not_authorized");
    }

    #[test]
    fn should_map_missing_files_to_bad_request() {
        let (status, body) = ProductError::NoFilesProvided.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.message, "product.no_files_uploaded");
    }

    #[test]
    fn should_hide_upload_cause_behind_generic_message() {
        let err = ProductError::Upload(MediaError::BatchItem {
            index: 1,
            source: Box::new(MediaError::UploadFailed("connection reset".to_string())),
        });

        let (status, body) = err.into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.0.message, "media.upload_failed");
    }

    #[test]
    fn should_map_persistence_failure_to_internal_error() {
        let (status, body) =
            ProductError::Repository(RepositoryError::Persistence).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "repository.persistence");
    }
}
