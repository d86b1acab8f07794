use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::fortune::FortuneError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Malformed LLM reply: {0}")]
    MalformedReply(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("A lookup is already in progress for this session")]
    LookupInProgress,
}

impl From<FortuneError> for AppError {
    fn from(err: FortuneError) -> Self {
        match err {
            FortuneError::Configuration => AppError::Configuration(
                "OPENAI_API_KEY is not set".to_string(),
            ),
            FortuneError::MalformedReply(reason) => AppError::MalformedReply(reason),
            FortuneError::Transport(reason) => AppError::Transport(reason),
            FortuneError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

impl AppError {
    /// Status, machine code, and the message shown to the user.
    /// Internal details are logged here and never returned.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CONFIGURATION_ERROR",
                    "The OpenAI API key is not configured. Check your .env file.".to_string(),
                )
            }
            AppError::MalformedReply(msg) => {
                tracing::warn!("Malformed LLM reply: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_REPLY",
                    "The fortune could not be interpreted. Please try again.".to_string(),
                )
            }
            AppError::Transport(msg) => {
                tracing::error!("Transport failure: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "TRANSPORT_ERROR",
                    "The fortune service is unavailable right now. Please try again.".to_string(),
                )
            }
            AppError::LookupInProgress => (
                StatusCode::CONFLICT,
                "LOOKUP_IN_PROGRESS",
                "A fortune is already being read for this session. Please wait.".to_string(),
            ),
        }
    }

    /// Whether re-running the lookup can succeed without changing input or config.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::MalformedReply(_) | AppError::Transport(_) | AppError::LookupInProgress
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
                "retryable": self.is_retryable()
            }
        }));

        (status, body).into_response()
    }
}
