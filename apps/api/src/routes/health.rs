use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness plus how the relay is wired: without an API key every
/// `/api/ask` call answers with the generic error.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "folio",
        "relay": {
            "api_key_configured": state.config.openai_api_key.is_some(),
            "chat_widget_enabled": state.config.chat_widget_enabled,
        }
    }))
}
