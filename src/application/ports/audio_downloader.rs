use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::AudioUrl;

pub type AudioStream = BoxStream<'static, Result<Bytes, io::Error>>;

/// Opens a streaming download of the audio behind a URL.
///
/// Implementations must reject non-success responses before returning a stream.
#[async_trait]
pub trait AudioDownloader: Send + Sync {
    async fn open(&self, url: &AudioUrl) -> Result<AudioStream, DownloadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("source responded with status {0}")]
    Status(u16),
    #[error("download request failed: {0}")]
    RequestFailed(String),
}
