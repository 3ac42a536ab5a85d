// src/error.rs
//! API error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Missing or invalid request fields; user-correctable.
    #[error("{0}")]
    Validation(String),
    /// Placeholder STT failed after its single retry.
    #[error("stt_failed")]
    Transcription(#[source] crate::transcribe::TranscribeError),
    /// Anything unrecoverable within a request (config-class faults).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Transcription(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_error_body() {
        let resp = ApiError::validation("channel and content are required").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn transcription_maps_to_502() {
        let resp =
            ApiError::Transcription(crate::transcribe::TranscribeError("boom".into()))
                .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn transcription_error_renders_stable_wire_code() {
        let err = ApiError::Transcription(crate::transcribe::TranscribeError("boom".into()));
        assert_eq!(err.to_string(), "stt_failed");
    }
}
