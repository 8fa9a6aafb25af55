//! Decoding of Gradio `/call` event streams and prediction payloads.

use serde_json::Value;

use crate::application::ports::InferenceError;
use crate::domain::TranscriptionResult;

/// Extracts the payload of the `complete` event from a Gradio SSE body.
///
/// An `error` event fails the call; a stream without `complete` is malformed.
pub fn parse_event_stream(body: &str) -> Result<Value, InferenceError> {
    let mut event: Option<&str> = None;
    let mut data: Vec<&str> = Vec::new();

    for line in body.lines().chain(std::iter::once("")) {
        if line.is_empty() {
            if let Some(name) = event.take() {
                let payload = data.join("\n");
                match name {
                    "complete" => {
                        return serde_json::from_str(&payload).map_err(|e| {
                            InferenceError::MalformedReply(format!("complete payload: {}", e))
                        });
                    }
                    "error" => return Err(InferenceError::PredictionFailed(describe(&payload))),
                    _ => {}
                }
            }
            data.clear();
            continue;
        }

        if let Some(name) = line.strip_prefix("event:") {
            event = Some(name.trim());
        } else if let Some(value) = line.strip_prefix("data:") {
            data.push(value.strip_prefix(' ').unwrap_or(value));
        }
    }

    Err(InferenceError::MalformedReply(
        "event stream ended without a complete event".to_string(),
    ))
}

/// Validates the `(transcription, summary, api_endpoint)` reply shape.
///
/// Elements past the third are ignored.
pub fn decode_prediction(value: &Value) -> Result<TranscriptionResult, InferenceError> {
    let items = value.as_array().ok_or_else(|| {
        InferenceError::MalformedReply(format!("expected an array, got {}", kind(value)))
    })?;

    if items.len() < 3 {
        return Err(InferenceError::MalformedReply(format!(
            "expected 3 elements, got {}",
            items.len()
        )));
    }

    let field = |index: usize, name: &str| -> Result<String, InferenceError> {
        items[index].as_str().map(str::to_string).ok_or_else(|| {
            InferenceError::MalformedReply(format!(
                "element {} ({}) is {}, expected string",
                index,
                name,
                kind(&items[index])
            ))
        })
    };

    Ok(TranscriptionResult::new(
        field(0, "transcription")?,
        field(1, "summary")?,
        field(2, "api_endpoint")?,
    ))
}

fn describe(payload: &str) -> String {
    match payload.trim() {
        "" | "null" => "remote model reported an error".to_string(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

