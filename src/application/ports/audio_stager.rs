use std::io;

use async_trait::async_trait;

use super::audio_downloader::AudioStream;
use crate::domain::StagedAudio;

#[async_trait]
pub trait AudioStager: Send + Sync {
    async fn stage(&self, stream: AudioStream) -> Result<StagedAudio, StagingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("failed to create staging file: {0}")]
    CreateFailed(String),
    #[error("failed to write staging file: {0}")]
    WriteFailed(String),
    #[error("download stream interrupted: {0}")]
    StreamInterrupted(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
