mod audio_url;
mod staged_audio;
mod transcription_request;
mod transcription_result;

pub use audio_url::{AudioUrl, AudioUrlError};
pub use staged_audio::StagedAudio;
pub use transcription_request::TranscriptionRequest;
pub use transcription_result::TranscriptionResult;
