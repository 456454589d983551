use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// The only failure text a relay caller ever sees.
pub const RELAY_ERROR_ANSWER: &str = "Error: Could not generate a response.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Relay error: {0}")]
    Relay(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                let body = Json(json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": msg
                    }
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED.into_response(),
            AppError::Relay(e) => {
                // Every upstream failure kind collapses into one answer; only the log tells them apart.
                tracing::error!("Relay error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "answer": RELAY_ERROR_ANSWER })),
                )
                    .into_response()
            }
        }
    }
}
