use super::audio_url::{AudioUrl, AudioUrlError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    pub url: AudioUrl,
}

impl TranscriptionRequest {
    pub fn new(url: AudioUrl) -> Self {
        Self { url }
    }

    pub fn from_raw(url: &str) -> Result<Self, AudioUrlError> {
        AudioUrl::parse(url).map(Self::new)
    }
}
