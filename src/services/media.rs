//! Media-hosting collaborator. Uploads never pass through this service;
//! clients hand over an upload reference and the media host returns the
//! durable URL plus the probed duration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::MediaConfig;
use crate::error::{AppError, Result};

/// Durable asset returned by the media host.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaAsset {
    pub url: String,
    #[serde(default)]
    pub duration_seconds: f64,
}

#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Resolve an upload reference into a durable asset.
    async fn ingest(&self, upload_ref: &str) -> Result<MediaAsset>;
}

/// HTTP client for the external media-hosting service.
pub struct HttpMediaHost {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct IngestRequest<'a> {
    upload_ref: &'a str,
}

impl HttpMediaHost {
    pub fn new(config: &MediaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("media host client init failed: {e}")))?;
        Ok(HttpMediaHost {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MediaHost for HttpMediaHost {
    async fn ingest(&self, upload_ref: &str) -> Result<MediaAsset> {
        let url = format!("{}/v1/ingest", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&IngestRequest { upload_ref })
            .send()
            .await?;

        if response.status().is_client_error() {
            return Err(AppError::Validation(
                "upload reference was rejected by the media host".into(),
            ));
        }
        if !response.status().is_success() {
            return Err(AppError::Internal(format!(
                "media host returned {}",
                response.status()
            )));
        }

        let asset: MediaAsset = response.json().await?;
        if asset.url.is_empty() {
            return Err(AppError::Internal(
                "media host returned an empty asset URL".into(),
            ));
        }
        Ok(asset)
    }
}
