use std::path::Path;

use tempfile::TempPath;

/// Downloaded audio held in a temporary file for the duration of one request.
///
/// The file is removed when this value is dropped.
#[derive(Debug)]
pub struct StagedAudio {
    path: TempPath,
    size_bytes: u64,
}

impl StagedAudio {
    pub fn new(path: TempPath, size_bytes: u64) -> Self {
        Self { path, size_bytes }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string())
    }
}
