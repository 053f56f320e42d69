use reqwest::Client;
use sha2::{Digest, Sha256};

use business::domain::media::errors::MediaError;
use business::domain::media::model::ResourceType;

pub const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com";

/// Account credentials for signed Upload API calls.
#[derive(Clone)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for CloudinaryCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}

/// Shared Cloudinary HTTP client configuration.
///
/// Without credentials the client still builds, but every call fails with
/// `MediaError::NotConfigured`.
pub struct CloudinaryClient {
    pub client: Client,
    pub base_url: String,
    credentials: Option<CloudinaryCredentials>,
}

impl CloudinaryClient {
    pub fn new(credentials: Option<CloudinaryCredentials>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn credentials(&self) -> Result<&CloudinaryCredentials, MediaError> {
        self.credentials.as_ref().ok_or(MediaError::NotConfigured)
    }

    /// Returns `{base}/v1_1/{cloud}/{resource_type}/{action}`.
    pub fn endpoint(
        &self,
        credentials: &CloudinaryCredentials,
        resource_type: ResourceType,
        action: &str,
    ) -> String {
        format!(
            "{}/v1_1/{}/{}/{}",
            self.base_url, credentials.cloud_name, resource_type, action
        )
    }
}

/// Signs request parameters the way the Upload API expects.
///
/// Parameters are sorted by name, joined as `k=v` pairs with `&`, suffixed
/// with the API secret and hashed with SHA-256. Callers pass only the signed
/// parameters: never `file`, `api_key`, `resource_type` or
/// `signature_algorithm`.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
