use std::io;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;

use crate::application::ports::{AudioDownloader, AudioStream, DownloadError};
use crate::domain::AudioUrl;
use crate::presentation::config::DownloadSettings;

pub struct ReqwestAudioDownloader {
    client: reqwest::Client,
}

impl ReqwestAudioDownloader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &DownloadSettings) -> Result<Self, DownloadError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| DownloadError::RequestFailed(format!("client: {}", e)))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl AudioDownloader for ReqwestAudioDownloader {
    async fn open(&self, url: &AudioUrl) -> Result<AudioStream, DownloadError> {
        tracing::debug!(url = %url, "Downloading audio");

        let response = self
            .client
            .get(url.as_url().clone())
            .send()
            .await
            .map_err(|e| DownloadError::RequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Audio source rejected download");
            return Err(DownloadError::Status(status.as_u16()));
        }

        Ok(response.bytes_stream().map(|chunk| chunk.map_err(io::Error::other)).boxed())
    }
}
