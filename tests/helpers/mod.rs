mod test_doubles;

pub use mock_server::start_mock_server;
pub use test_doubles::{
    FailingInferenceClient, RecordingDownloader, RecordingInferenceClient, staged_files,
};
