use super::{
    cloudinary_config::CloudinaryConfig, cors_config, firebase_config::FirebaseConfig,
    server_config::ServerConfig, upload_config::UploadConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub firebase: FirebaseConfig,
    pub cloudinary: CloudinaryConfig,
    pub upload: UploadConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            firebase: FirebaseConfig::from_env()?,
            cloudinary: CloudinaryConfig::from_env(),
            upload: UploadConfig::from_env(),
        })
    }
}
