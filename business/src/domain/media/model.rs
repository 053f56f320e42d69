use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::MediaError;

/// A source of raw file bytes that can be read exactly once.
///
/// Reading may suspend (e.g. while a spooled multipart part is read back),
/// which is why materialization happens inside each upload task.
#[async_trait]
pub trait FileBlob: Send {
    async fn read_bytes(self: Box<Self>) -> Result<Vec<u8>, MediaError>;
}

/// Bytes that are already in memory.
pub struct InMemoryBlob(pub Vec<u8>);

#[async_trait]
impl FileBlob for InMemoryBlob {
    async fn read_bytes(self: Box<Self>) -> Result<Vec<u8>, MediaError> {
        Ok(self.0)
    }
}

/// One image part of an upload request.
pub struct ImageFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub blob: Box<dyn FileBlob>,
}

impl ImageFile {
    pub fn new(
        file_name: Option<String>,
        content_type: Option<String>,
        blob: impl FileBlob + 'static,
    ) -> Self {
        Self {
            file_name,
            content_type,
            blob: Box::new(blob),
        }
    }

    pub fn in_memory(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(Some(file_name.into()), None, InMemoryBlob(bytes))
    }
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Resource type directive understood by the media host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Let the host detect the type from the bytes.
    Auto,
    Image,
    Video,
    Raw,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Auto => write!(f, "auto"),
            ResourceType::Image => write!(f, "image"),
            ResourceType::Video => write!(f, "video"),
            ResourceType::Raw => write!(f, "raw"),
        }
    }
}

impl std::str::FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ResourceType::Auto),
            "image" => Ok(ResourceType::Image),
            "video" => Ok(ResourceType::Video),
            "raw" => Ok(ResourceType::Raw),
            _ => Err(format!("Invalid resource type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadOptions {
    pub resource_type: ResourceType,
    pub file_name: Option<String>,
}

impl UploadOptions {
    pub fn auto(file_name: Option<String>) -> Self {
        Self {
            resource_type: ResourceType::Auto,
            file_name,
        }
    }
}

/// Descriptor of a resource the media host has stored.
#[derive(Debug, Clone, PartialEq)]
pub struct HostedMedia {
    pub public_id: String,
    /// Durable retrieval URL.
    pub secure_url: Url,
    /// Concrete type the host resolved; never `Auto`.
    pub resource_type: ResourceType,
    pub format: Option<String>,
    pub bytes: Option<u64>,
}
