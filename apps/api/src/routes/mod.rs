pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dialogue::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dialogue API
        .route(
            "/api/generate-dialogue",
            post(handlers::handle_generate_dialogue),
        )
        .route(
            "/api/continue-dialogue",
            post(handlers::handle_continue_dialogue),
        )
        // Legacy single-shot endpoint, same operation as generate-dialogue
        .route(
            "/api/generate-message",
            post(handlers::handle_generate_dialogue),
        )
        .with_state(state)
}
