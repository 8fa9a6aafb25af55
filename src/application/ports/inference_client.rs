use async_trait::async_trait;

use crate::domain::{StagedAudio, TranscriptionResult};

/// Remote model that turns a staged audio file into a transcription and summary.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn predict(&self, audio: &StagedAudio) -> Result<TranscriptionResult, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("inference client initialization failed: {0}")]
    InitializationFailed(String),
    #[error("audio upload failed: {0}")]
    UploadFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
    #[error("malformed reply: {0}")]
    MalformedReply(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
