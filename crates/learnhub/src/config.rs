//! Application configuration: where the API and the media host live.

use serde::Deserialize;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Static configuration, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the primary REST API.
    pub api_base_url: String,
    /// Endpoint of the third-party media-hosting service.
    pub media_upload_url: String,
}

impl Config {
    /// Reads configuration from `LEARNHUB_API_BASE_URL` and
    /// `LEARNHUB_MEDIA_UPLOAD_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: std::env::var("LEARNHUB_API_BASE_URL")
                .map_err(|_| ConfigError::MissingVar("LEARNHUB_API_BASE_URL"))?,
            media_upload_url: std::env::var("LEARNHUB_MEDIA_UPLOAD_URL")
                .map_err(|_| ConfigError::MissingVar("LEARNHUB_MEDIA_UPLOAD_URL"))?,
        })
    }
}
