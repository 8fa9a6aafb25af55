use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use futures::StreamExt;

use voxrelay::application::ports::{
    AudioDownloader, AudioStream, DownloadError, InferenceClient, InferenceError,
};
use voxrelay::domain::{AudioUrl, StagedAudio, TranscriptionResult};

/// Serves fixed bytes and counts how often it was asked to.
pub struct RecordingDownloader {
    pub calls: AtomicUsize,
    pub status: Option<u16>,
    pub body: &'static [u8],
}

impl RecordingDownloader {
    pub fn ok(body: &'static [u8]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            status: None,
            body,
        }
    }

    pub fn failing_with(status: u16) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            status: Some(status),
            body: b"",
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AudioDownloader for RecordingDownloader {
    async fn open(&self, _url: &AudioUrl) -> Result<AudioStream, DownloadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.status {
            return Err(DownloadError::Status(status));
        }
        let chunks: Vec<Result<Bytes, std::io::Error>> = self
            .body
            .chunks(4)
            .map(|c| Ok(Bytes::copy_from_slice(c)))
            .collect();
        Ok(futures::stream::iter(chunks).boxed())
    }
}

/// Succeeds with a fixed result and remembers which staged files it saw.
pub struct RecordingInferenceClient {
    pub result: TranscriptionResult,
    pub seen: Mutex<Vec<(PathBuf, bool, u64)>>,
}

impl RecordingInferenceClient {
    pub fn new(result: TranscriptionResult) -> Self {
        Self {
            result,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<(PathBuf, bool, u64)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl InferenceClient for RecordingInferenceClient {
    async fn predict(&self, audio: &StagedAudio) -> Result<TranscriptionResult, InferenceError> {
        self.seen.lock().unwrap().push((
            audio.path().to_path_buf(),
            audio.path().exists(),
            audio.size_bytes(),
        ));
        Ok(self.result.clone())
    }
}

pub struct FailingInferenceClient;

#[async_trait::async_trait]
impl InferenceClient for FailingInferenceClient {
    async fn predict(&self, _audio: &StagedAudio) -> Result<TranscriptionResult, InferenceError> {
        Err(InferenceError::PredictionFailed(
            "remote model reported an error".to_string(),
        ))
    }
}

/// Files in `dir` that look like staged audio.
pub fn staged_files(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix) && n.ends_with(".wav"))
        })
        .collect()
}
