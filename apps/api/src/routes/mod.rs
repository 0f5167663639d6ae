pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/contacts/optimize", post(handlers::handle_optimize))
        .route("/api/v1/contacts/generate", post(handlers::handle_generate))
        .route("/api/v1/contacts/export", post(handlers::handle_export))
        .with_state(state)
}
