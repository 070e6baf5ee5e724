//! Flag Quiz Error Types
//!
//! Boundary failures of the quiz core plus the upstream failures of the
//! collaborators that feed it (dataset file, flag CDN).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Quiz-specific result type alias
pub type QuizResult<T> = Result<T, QuizError>;

/// Quiz-specific error variants
///
/// None of these are retried inside the crate. They surface to the HTTP layer,
/// which turns them into a status code and a small JSON body.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Caller asked for fewer than one option
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Catalog loaded but holds no entries
    #[error("No flag data available")]
    EmptyCatalog,

    /// Dataset missing or malformed
    #[error("Flag data unavailable: {0}")]
    DataUnavailable(String),

    /// Flag image could not be fetched for the selected code
    #[error("Flag image unavailable for '{code}': {reason}")]
    ImageUnavailable { code: String, reason: String },

    /// Flag CDN code list could not be fetched
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuizError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            QuizError::EmptyCatalog | QuizError::DataUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            QuizError::ImageUnavailable { .. } | QuizError::UpstreamUnavailable(_) => {
                StatusCode::BAD_GATEWAY
            }
            QuizError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the failure originates on our side rather than the caller's
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuizError::DataUnavailable(reason) => {
                tracing::error!(reason = %reason, "Flag data unavailable");
            }
            QuizError::EmptyCatalog => {
                tracing::error!("Flag catalog is empty");
            }
            QuizError::Internal(msg) => {
                tracing::error!(message = %msg, "Quiz internal error");
            }
            QuizError::ImageUnavailable { code, reason } => {
                tracing::warn!(code = %code, reason = %reason, "Flag image fetch failed");
            }
            QuizError::UpstreamUnavailable(reason) => {
                tracing::warn!(reason = %reason, "Flag CDN unavailable");
            }
            QuizError::InvalidArgument(_) => {
                tracing::debug!(error = %self, "Quiz request rejected");
            }
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Server-side details stay in the logs
        let message = if self.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<reqwest::Error> for QuizError {
    fn from(err: reqwest::Error) -> Self {
        QuizError::UpstreamUnavailable(err.to_string())
    }
}
