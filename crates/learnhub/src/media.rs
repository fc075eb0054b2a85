//! Media upload side channel.
//!
//! Course images, library thumbnails, and organization logos are uploaded as
//! `multipart/form-data` to a third-party media host, outside the primary API. The
//! returned secure URL is what the primary API receives in the subsequent
//! create/update payload.
//!
//! Like the stores, the uploader talks to the network through a trait seam:
//! [`UploadTransport`] carries the wire call, [`MediaUploader`] owns the response
//! contract (a 2xx body must contain a secure URL). Tests inject a fake transport.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    /// No response from the media host.
    #[error("upload failed: {0}")]
    Network(String),

    /// The media host rejected the upload.
    #[error("upload failed")]
    Rejected,

    /// A 2xx response without a secure URL in the body.
    #[error("upload response missing secure URL")]
    MissingUrl,
}

/// The wire seam to the media host. Production code uses
/// [`HttpUploadTransport`]; tests substitute an in-memory fake.
#[async_trait]
pub trait UploadTransport: Send + Sync {
    /// Sends one file as `multipart/form-data` and returns the parsed JSON body of
    /// a successful response.
    async fn send(&self, file_name: &str, bytes: Vec<u8>) -> Result<Value, UploadError>;
}

/// Multipart POST to the configured third-party endpoint.
#[derive(Debug, Clone)]
pub struct HttpUploadTransport {
    client: reqwest::Client,
    upload_url: String,
}

impl HttpUploadTransport {
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: upload_url.into(),
        }
    }
}

#[async_trait]
impl UploadTransport for HttpUploadTransport {
    async fn send(&self, file_name: &str, bytes: Vec<u8>) -> Result<Value, UploadError> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(UploadError::Rejected);
        }

        response
            .json()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))
    }
}

/// Client for the media-hosting side channel.
#[derive(Clone)]
pub struct MediaUploader {
    transport: Arc<dyn UploadTransport>,
}

impl MediaUploader {
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self::with_transport(Arc::new(HttpUploadTransport::new(upload_url)))
    }

    pub fn with_transport(transport: Arc<dyn UploadTransport>) -> Self {
        Self { transport }
    }

    /// Uploads one file and returns its hosted secure URL.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, UploadError> {
        let body = self.transport.send(file_name, bytes).await?;
        let url = body
            .get("secure_url")
            .and_then(Value::as_str)
            .ok_or(UploadError::MissingUrl)?;

        debug!(file_name, url, "media uploaded");
        Ok(url.to_string())
    }
}
