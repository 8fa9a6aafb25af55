use axum::Router;
use axum::body::Body;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::{
    make_request_span, propagate_request_id_layer, set_request_id_layer,
};
use crate::presentation::handlers::{
    docs_handler, health_handler, home_handler, openapi_handler, transcribe_url_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(make_request_span::<Body>)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(home_handler))
        .route("/transcribe_url", post(transcribe_url_handler))
        .route("/health", get(health_handler))
        .route("/docs", get(docs_handler))
        .route("/openapi.json", get(openapi_handler))
        .layer(propagate_request_id_layer())
        .layer(trace_layer)
        .layer(set_request_id_layer())
        .layer(cors)
        .with_state(state)
}
