use serde_json::json;

use voxrelay::application::ports::InferenceError;
use voxrelay::infrastructure::inference::gradio_protocol::{decode_prediction, parse_event_stream};

#[test]
fn given_generating_then_complete_events_when_parsing_then_returns_complete_payload() {
    let body = "event: generating\ndata: [\"partial\"]\n\nevent: complete\ndata: [\"a\", \"b\", \"c\"]\n\n";

    let value = parse_event_stream(body).unwrap();

    assert_eq!(value, json!(["a", "b", "c"]));
}

#[test]
fn given_crlf_line_endings_when_parsing_then_returns_complete_payload() {
    let body = "event: complete\r\ndata: [1]\r\n\r\n";

    assert_eq!(parse_event_stream(body).unwrap(), json!([1]));
}

#[test]
fn given_stream_without_trailing_blank_line_when_parsing_then_still_completes() {
    let body = "event: complete\ndata: [\"x\"]";

    assert_eq!(parse_event_stream(body).unwrap(), json!(["x"]));
}

#[test]
fn given_error_event_with_null_data_when_parsing_then_prediction_failed() {
    let body = "event: error\ndata: null\n\n";

    let result = parse_event_stream(body);

    assert!(matches!(
        result,
        Err(InferenceError::PredictionFailed(msg)) if msg == "remote model reported an error"
    ));
}

#[test]
fn given_error_event_with_message_when_parsing_then_message_is_kept() {
    let body = "event: error\ndata: \"CUDA out of memory\"\n\n";

    let err = parse_event_stream(body).unwrap_err();

    assert!(err.to_string().contains("CUDA out of memory"));
}

#[test]
fn given_heartbeats_only_when_parsing_then_malformed_reply() {
    let body = "event: heartbeat\ndata: null\n\nevent: heartbeat\ndata: null\n\n";

    assert!(matches!(
        parse_event_stream(body),
        Err(InferenceError::MalformedReply(_))
    ));
}

#[test]
fn given_invalid_json_in_complete_event_when_parsing_then_malformed_reply() {
    let body = "event: complete\ndata: [unterminated\n\n";

    assert!(matches!(
        parse_event_stream(body),
        Err(InferenceError::MalformedReply(_))
    ));
}

#[test]
fn given_three_strings_when_decoding_then_fields_map_in_order() {
    let value = json!(["hello world", "a greeting", "/predict"]);

    let result = decode_prediction(&value).unwrap();

    assert_eq!(result.transcription, "hello world");
    assert_eq!(result.summary, "a greeting");
    assert_eq!(result.api_endpoint, "/predict");
}

#[test]
fn given_extra_elements_when_decoding_then_they_are_ignored() {
    let value = json!(["t", "s", "e", {"extra": true}]);

    assert!(decode_prediction(&value).is_ok());
}

#[test]
fn given_two_elements_when_decoding_then_malformed_reply() {
    let value = json!(["t", "s"]);

    let err = decode_prediction(&value).unwrap_err();

    assert!(err.to_string().contains("expected 3 elements, got 2"));
}

#[test]
fn given_non_string_element_when_decoding_then_malformed_reply() {
    let value = json!(["t", 42, "e"]);

    let err = decode_prediction(&value).unwrap_err();

    assert!(err.to_string().contains("element 1 (summary) is a number"));
}

#[test]
fn given_object_reply_when_decoding_then_malformed_reply() {
    let value = json!({"transcription": "t"});

    assert!(matches!(
        decode_prediction(&value),
        Err(InferenceError::MalformedReply(_))
    ));
}
