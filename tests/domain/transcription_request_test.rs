use voxrelay::domain::{AudioUrlError, TranscriptionRequest};

#[test]
fn given_valid_raw_url_when_building_request_then_url_is_verbatim() {
    let request = TranscriptionRequest::from_raw("https://example.com/talk.wav").unwrap();

    assert_eq!(request.url.as_str(), "https://example.com/talk.wav");
}

#[test]
fn given_empty_raw_url_when_building_request_then_fails() {
    assert_eq!(
        TranscriptionRequest::from_raw(""),
        Err(AudioUrlError::Empty)
    );
}
