use business::application::media::upload_batch::DEFAULT_MAX_IN_FLIGHT;

/// Settings for the image upload fan-out
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_concurrency: usize,
}

impl UploadConfig {
    /// Environment variables:
    /// - UPLOAD_MAX_CONCURRENCY: Uploads in flight per request (default: 4, minimum: 1)
    pub fn from_env() -> Self {
        Self {
            max_concurrency: parse_max_concurrency(std::env::var("UPLOAD_MAX_CONCURRENCY").ok()),
        }
    }
}

fn parse_max_concurrency(raw: Option<String>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_IN_FLIGHT)
        .max(1)
}
