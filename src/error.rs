use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::shared::{ErrorResponse, FailureResponse};

/// Public message for every server-side failure; details stay in the logs
pub const SYNTHESIS_FAILED_MESSAGE: &str = "Failed to generate WAV file.";

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::SynthesisFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::BadRequest(message) | Self::PayloadTooLarge(message) => {
                tracing::warn!(
                    error = %message,
                    status = %status.as_u16(),
                    "Request rejected"
                );
                (status, Json(ErrorResponse { error: message })).into_response()
            }
            Self::SynthesisFailed(detail) => {
                tracing::error!(
                    error = %detail,
                    status = %status.as_u16(),
                    "Request failed"
                );
                let body = FailureResponse {
                    success: false,
                    error: SYNTHESIS_FAILED_MESSAGE.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
