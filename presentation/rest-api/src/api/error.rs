use poem::{IntoResponse, Response, http::StatusCode};
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Body returned by every failed request.
#[derive(Object, Serialize, Debug)]
pub struct ErrorEnvelope {
    /// Always `false`
    pub success: bool,
    /// Code-style failure identifier
    pub message: String,
}

impl ErrorEnvelope {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorEnvelope>);
}

const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Renders errors no handler classified (malformed multipart, unknown routes)
/// as the standard envelope, keeping the error's own status.
pub async fn unclassified_error(err: poem::Error) -> Response {
    let status = err.status();
    let message = if status.is_server_error() {
        tracing::error!(error = %err, "Unhandled request error");
        INTERNAL_ERROR_MESSAGE.to_string()
    } else {
        err.to_string()
    };

    (status, poem::web::Json(ErrorEnvelope::failure(message))).into_response()
}

/// Handler for `CatchPanic`.
pub fn panic_response(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        poem::web::Json(ErrorEnvelope::failure(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
