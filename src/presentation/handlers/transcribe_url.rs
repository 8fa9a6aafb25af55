use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranscribeUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct TranscribeUrlResponse {
    pub source_url: String,
    pub transcription: String,
    pub summary: String,
    pub api_endpoint: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn transcribe_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<TranscribeUrlRequest>, JsonRejection>,
) -> Result<Json<TranscribeUrlResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;

    tracing::debug!(url = %body.url, "Transcription requested");

    let result = state.relay_service.relay(&body.url).await?;

    Ok(Json(TranscribeUrlResponse {
        source_url: body.url,
        transcription: result.transcription,
        summary: result.summary,
        api_endpoint: result.api_endpoint,
    }))
}
