/// Reply of the remote model, field for field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub transcription: String,
    pub summary: String,
    pub api_endpoint: String,
}

impl TranscriptionResult {
    pub fn new(
        transcription: impl Into<String>,
        summary: impl Into<String>,
        api_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            transcription: transcription.into(),
            summary: summary.into(),
            api_endpoint: api_endpoint.into(),
        }
    }
}
