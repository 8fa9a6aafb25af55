use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{InferenceClient, InferenceError};
use crate::domain::{StagedAudio, TranscriptionResult};

/// Canned inference client used in scaffold mode.
pub struct MockInferenceClient {
    result: TranscriptionResult,
    delay: Duration,
}

impl MockInferenceClient {
    pub fn new(result: TranscriptionResult) -> Self {
        Self {
            result,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new(TranscriptionResult::new(
            "Scaffold transcription.",
            "Scaffold summary.",
            "/predict",
        ))
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn predict(&self, audio: &StagedAudio) -> Result<TranscriptionResult, InferenceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        tracing::debug!(bytes = audio.size_bytes(), "Returning scaffold prediction");
        Ok(self.result.clone())
    }
}
