use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub inference: String,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let inference = if state.relay_service.is_available() {
        "ready"
    } else {
        "unavailable"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            inference: inference.to_string(),
        }),
    )
}
