use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    AudioDownloader, AudioStager, DownloadError, InferenceClient, InferenceError, StagingError,
};
use crate::domain::{AudioUrlError, TranscriptionRequest, TranscriptionResult};

/// Download, stage, and forward one audio URL to the remote model.
///
/// The inference client is resolved once at startup; when it is absent every
/// call fails with [`RelayError::ServiceUnavailable`].
pub struct RelayService {
    downloader: Arc<dyn AudioDownloader>,
    stager: Arc<dyn AudioStager>,
    inference_client: Option<Arc<dyn InferenceClient>>,
    inference_timeout: Duration,
}

impl RelayService {
    pub fn new(
        downloader: Arc<dyn AudioDownloader>,
        stager: Arc<dyn AudioStager>,
        inference_client: Option<Arc<dyn InferenceClient>>,
        inference_timeout: Duration,
    ) -> Self {
        Self {
            downloader,
            stager,
            inference_client,
            inference_timeout,
        }
    }

    pub fn is_available(&self) -> bool {
        self.inference_client.is_some()
    }

    #[tracing::instrument(skip(self))]
    pub async fn relay(&self, raw_url: &str) -> Result<TranscriptionResult, RelayError> {
        let inference_client = self
            .inference_client
            .as_ref()
            .ok_or(RelayError::ServiceUnavailable)?;

        let request = TranscriptionRequest::from_raw(raw_url).map_err(RelayError::InvalidUrl)?;

        let stream = self
            .downloader
            .open(&request.url)
            .await
            .map_err(RelayError::Download)?;

        let staged = self.stager.stage(stream).await.map_err(RelayError::Staging)?;

        tracing::debug!(
            path = %staged.path().display(),
            bytes = staged.size_bytes(),
            "Audio staged for inference"
        );

        // `staged` is dropped on every path out of this function, removing the file.
        let result = tokio::time::timeout(self.inference_timeout, inference_client.predict(&staged))
            .await
            .map_err(|_| RelayError::TimedOut(self.inference_timeout))?
            .map_err(RelayError::Inference)?;

        tracing::info!(
            url = %request.url,
            transcription_chars = result.transcription.len(),
            summary_chars = result.summary.len(),
            "Relay completed"
        );

        Ok(result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("inference service is not initialized")]
    ServiceUnavailable,
    #[error("invalid url: {0}")]
    InvalidUrl(AudioUrlError),
    #[error("download: {0}")]
    Download(DownloadError),
    #[error("staging: {0}")]
    Staging(StagingError),
    #[error("inference: {0}")]
    Inference(InferenceError),
    #[error("inference timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
}
