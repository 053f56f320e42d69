use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness endpoint for load balancers and container probes.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Public; reports "healthy" with the server time (RFC 3339) and the
    /// crate version.
    #[oai(path = "/api/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::StatusCode;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_healthy_when_service_is_up() {
        let cli = TestClient::new(
            Route::new().nest("/", OpenApiService::new(Api::new(), "health", "test")),
        );

        let resp = cli.get("/api/health").send().await;

        resp.assert_status(StatusCode::OK);
        let body: HealthCheckResponse = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
