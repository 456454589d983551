pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::ask::handlers as ask;
use crate::site::handlers as site;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // CV and certificate PDFs, profile picture: served as-is.
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(site::handle_page))
        .route("/knowledge", get(site::handle_knowledge))
        .route(
            "/api/ask",
            post(ask::handle_ask).fallback(ask::handle_ask_method_not_allowed),
        )
        .fallback_service(assets)
        .with_state(state)
}
