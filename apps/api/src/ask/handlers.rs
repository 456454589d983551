//! Axum route handlers for the relay endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ask::prompts::build_ask_request;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub knowledge: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// POST /api/ask
///
/// Both fields must be present and string-typed. Empty strings are accepted
/// and still forwarded upstream.
pub async fn handle_ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    debug!(
        question_len = req.question.len(),
        knowledge_len = req.knowledge.len(),
        "relaying question"
    );

    let request = build_ask_request(&req.knowledge, &req.question);
    let answer = state.completion.complete(request).await?;

    Ok(Json(AskResponse { answer }))
}

/// Any non-POST method on /api/ask.
pub async fn handle_ask_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
