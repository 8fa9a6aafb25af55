use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{AudioStager, AudioStream, StagingError};
use crate::domain::StagedAudio;
use crate::presentation::config::StagingSettings;

/// Writes downloaded audio to uniquely named files under a staging directory.
pub struct TempFileStager {
    directory: PathBuf,
    prefix: String,
    suffix: String,
}

impl TempFileStager {
    pub fn new(
        directory: PathBuf,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self, StagingError> {
        std::fs::create_dir_all(&directory)?;
        Ok(Self {
            directory,
            prefix: prefix.into(),
            suffix: suffix.into(),
        })
    }

    pub fn from_settings(settings: &StagingSettings) -> Result<Self, StagingError> {
        let directory = settings
            .directory
            .clone()
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);
        Self::new(directory, &settings.prefix, &settings.suffix)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl AudioStager for TempFileStager {
    async fn stage(&self, mut stream: AudioStream) -> Result<StagedAudio, StagingError> {
        let named = tempfile::Builder::new()
            .prefix(&self.prefix)
            .suffix(&self.suffix)
            .tempfile_in(&self.directory)
            .map_err(|e| StagingError::CreateFailed(e.to_string()))?;

        // The path guard removes the file if any write below fails.
        let (file, path) = named.into_parts();
        let mut file = tokio::fs::File::from_std(file);
        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| StagingError::StreamInterrupted(e.to_string()))?;
            file.write_all(&bytes)
                .await
                .map_err(|e| StagingError::WriteFailed(e.to_string()))?;
            total_bytes += bytes.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| StagingError::WriteFailed(e.to_string()))?;

        Ok(StagedAudio::new(path, total_bytes))
    }
}
