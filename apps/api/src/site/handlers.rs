//! Axum route handlers for the page itself.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::site::render::{render_page, PageOptions};
use crate::site::sections::AccordionState;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub open: Option<String>,
}

/// GET /
pub async fn handle_page(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Html<String> {
    let options = PageOptions {
        accordion: AccordionState::from_query(params.open.as_deref()),
        chat_widget: state.config.chat_widget_enabled,
    };
    Html(render_page(&options))
}

/// GET /knowledge
/// The knowledge text the chat widget sends with each question.
pub async fn handle_knowledge(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.knowledge.to_string(),
    )
}
