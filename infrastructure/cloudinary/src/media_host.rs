use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

use business::domain::media::errors::MediaError;
use business::domain::media::model::{HostedMedia, ResourceType, UploadOptions};
use business::domain::media::services::MediaHost;

use crate::client::{CloudinaryClient, sign};

const SIGNATURE_ALGORITHM: &str = "sha256";

#[derive(Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
    resource_type: String,
    format: Option<String>,
    bytes: Option<u64>,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct CloudinaryMediaHost {
    client: CloudinaryClient,
}

impl CloudinaryMediaHost {
    pub fn new(client: CloudinaryClient) -> Self {
        Self { client }
    }

    fn into_hosted(response: UploadResponse) -> Result<HostedMedia, MediaError> {
        let secure_url = Url::parse(&response.secure_url)
            .map_err(|e| MediaError::Rejected(format!("invalid secure_url: {e}")))?;
        let resource_type = response
            .resource_type
            .parse::<ResourceType>()
            .unwrap_or(ResourceType::Raw);

        Ok(HostedMedia {
            public_id: response.public_id,
            secure_url,
            resource_type,
            format: response.format,
            bytes: response.bytes,
        })
    }

    async fn rejection(response: reqwest::Response) -> String {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) => format!("{}: {}", status, body.error.message),
            Err(_) => format!("{}: {}", status, text),
        }
    }
}

#[async_trait]
impl MediaHost for CloudinaryMediaHost {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        options: &UploadOptions,
    ) -> Result<HostedMedia, MediaError> {
        let credentials = self.client.credentials()?;
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(&[("timestamp", timestamp.as_str())], &credentials.api_secret);

        let mut file = Part::bytes(bytes);
        if let Some(file_name) = &options.file_name {
            file = file.file_name(file_name.clone());
        }
        let form = Form::new()
            .part("file", file)
            .text("api_key", credentials.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature_algorithm", SIGNATURE_ALGORITHM)
            .text("signature", signature);

        let response = self
            .client
            .client
            .post(self.client.endpoint(credentials, options.resource_type, "upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::UploadFailed(e.to_string()))?;

        if !response.status().is_success() {
            let reason = Self::rejection(response).await;
            tracing::warn!(reason = %reason, "Cloudinary rejected upload");
            return Err(MediaError::Rejected(reason));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::UploadFailed(format!("unreadable response: {e}")))?;

        Self::into_hosted(body)
    }

    async fn delete(&self, media: &HostedMedia) -> Result<(), MediaError> {
        let credentials = self.client.credentials()?;
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &[("public_id", media.public_id.as_str()), ("timestamp", timestamp.as_str())],
            &credentials.api_secret,
        );

        let response = self
            .client
            .client
            .post(self.client.endpoint(credentials, media.resource_type, "destroy"))
            .form(&[
                ("public_id", media.public_id.as_str()),
                ("api_key", credentials.api_key.as_str()),
                ("timestamp", timestamp.as_str()),
                ("signature_algorithm", SIGNATURE_ALGORITHM),
                ("signature", signature.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MediaError::DeleteFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MediaError::DeleteFailed(Self::rejection(response).await));
        }

        let body: DestroyResponse = response
            .json()
            .await
            .map_err(|e| MediaError::DeleteFailed(format!("unreadable response: {e}")))?;

        // "not found" means the resource is already gone.
        match body.result.as_str() {
            "ok" | "not found" => Ok(()),
            other => Err(MediaError::DeleteFailed(other.to_string())),
        }
    }
}
