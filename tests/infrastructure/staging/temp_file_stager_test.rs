use std::io;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream;

use voxrelay::application::ports::{AudioStager, AudioStream, StagingError};
use voxrelay::infrastructure::staging::TempFileStager;
use voxrelay::presentation::config::StagingSettings;

use crate::helpers::staged_files;

fn create_test_stager() -> (tempfile::TempDir, TempFileStager) {
    let dir = tempfile::TempDir::new().unwrap();
    let stager = TempFileStager::new(dir.path().to_path_buf(), "voxrelay-", ".wav").unwrap();
    (dir, stager)
}

fn chunks_of(text: &'static str) -> AudioStream {
    stream::iter(vec![Ok::<_, io::Error>(Bytes::from(text))]).boxed()
}

#[tokio::test]
async fn given_valid_stream_when_staging_then_file_holds_all_chunks() {
    let (dir, stager) = create_test_stager();
    let chunks: Vec<Result<Bytes, io::Error>> =
        vec![Ok(Bytes::from("hello ")), Ok(Bytes::from("world"))];

    let staged = stager.stage(stream::iter(chunks).boxed()).await.unwrap();

    assert_eq!(staged.size_bytes(), 11);
    assert_eq!(std::fs::read(staged.path()).unwrap(), b"hello world");
    assert!(staged.path().starts_with(dir.path()));
    assert_eq!(staged_files(dir.path(), "voxrelay-").len(), 1);
}

#[tokio::test]
async fn given_two_stages_when_staging_then_paths_differ() {
    let (_dir, stager) = create_test_stager();

    let first = stager
        .stage(chunks_of("a"))
        .await
        .unwrap();
    let second = stager
        .stage(chunks_of("b"))
        .await
        .unwrap();

    assert_ne!(first.path(), second.path());
}

#[tokio::test]
async fn given_stream_error_when_staging_then_returns_error_and_leaves_no_file() {
    let (dir, stager) = create_test_stager();
    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
    ];

    let result = stager.stage(stream::iter(chunks).boxed()).await;

    assert!(matches!(result, Err(StagingError::StreamInterrupted(_))));
    assert!(staged_files(dir.path(), "voxrelay-").is_empty());
}

#[tokio::test]
async fn given_staged_audio_when_dropped_then_directory_is_empty() {
    let (dir, stager) = create_test_stager();

    let staged = stager
        .stage(chunks_of("data"))
        .await
        .unwrap();
    drop(staged);

    assert!(staged_files(dir.path(), "voxrelay-").is_empty());
}

#[test]
fn given_missing_directory_when_creating_then_directory_is_created() {
    let root = tempfile::TempDir::new().unwrap();
    let nested = root.path().join("staging").join("audio");

    let stager = TempFileStager::new(nested.clone(), "voxrelay-", ".wav").unwrap();

    assert!(nested.is_dir());
    assert_eq!(stager.directory(), nested.as_path());
}

#[test]
fn given_settings_without_directory_when_creating_then_uses_system_temp_dir() {
    let settings = StagingSettings {
        directory: None,
        prefix: "voxrelay-".to_string(),
        suffix: ".wav".to_string(),
    };

    let stager = TempFileStager::from_settings(&settings).unwrap();

    assert_eq!(stager.directory(), std::env::temp_dir().as_path());
}
