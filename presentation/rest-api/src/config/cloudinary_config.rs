use cloudinary::client::CloudinaryCredentials;

/// Media host account settings.
///
/// Environment variables:
/// - CLOUDINARY_CLOUD_NAME
/// - CLOUDINARY_API_KEY
/// - CLOUDINARY_API_SECRET
///
/// All three are needed; with any of them missing the service still starts
/// and every upload fails.
pub struct CloudinaryConfig {
    pub credentials: Option<CloudinaryCredentials>,
}

impl CloudinaryConfig {
    pub fn from_env() -> Self {
        let read = |key: &str| std::env::var(key).ok();
        let config = Self::from_values(
            read("CLOUDINARY_CLOUD_NAME"),
            read("CLOUDINARY_API_KEY"),
            read("CLOUDINARY_API_SECRET"),
        );
        if config.credentials.is_none() {
            tracing::warn!("Cloudinary credentials incomplete; image uploads will fail");
        }
        config
    }

    fn from_values(
        cloud_name: Option<String>,
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let credentials = match (non_empty(cloud_name), non_empty(api_key), non_empty(api_secret)) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryCredentials {
                cloud_name,
                api_key,
                api_secret,
            }),
            _ => None,
        };
        Self { credentials }
    }
}
