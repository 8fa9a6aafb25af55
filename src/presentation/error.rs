use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{DownloadError, StagingError};
use crate::application::services::RelayError;

pub const SERVICE_UNAVAILABLE_DETAIL: &str = "Inference service client not initialized";
pub const DOWNLOAD_FAILED_DETAIL: &str = "Failed to download audio file from URL";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Gateway-level failure, one variant per response class.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    ServiceUnavailable(String),
    #[error("{0}")]
    DownloadFailed(String),
    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DownloadFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::ServiceUnavailable => {
                ApiError::ServiceUnavailable(SERVICE_UNAVAILABLE_DETAIL.to_string())
            }
            RelayError::InvalidUrl(e) => ApiError::InvalidRequest(e.to_string()),
            RelayError::Download(DownloadError::Status(status)) => ApiError::DownloadFailed(
                format!("{}: source responded with status {}", DOWNLOAD_FAILED_DETAIL, status),
            ),
            RelayError::Download(e @ DownloadError::RequestFailed(_)) => {
                ApiError::InternalError(e.to_string())
            }
            RelayError::Staging(e @ StagingError::StreamInterrupted(_)) => {
                ApiError::InternalError(e.to_string())
            }
            RelayError::Staging(e) => {
                // File system errors carry local paths.
                tracing::error!(error = %e, "Failed to stage downloaded audio");
                ApiError::InternalError("failed to stage downloaded audio".to_string())
            }
            RelayError::Inference(e) => ApiError::InternalError(e.to_string()),
            e @ RelayError::TimedOut(_) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), detail = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), detail = %self, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
