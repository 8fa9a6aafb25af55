mod audio_downloader;
mod audio_stager;
mod inference_client;

pub use audio_downloader::{AudioDownloader, AudioStream, DownloadError};
pub use audio_stager::{AudioStager, StagingError};
pub use inference_client::{InferenceClient, InferenceError};
