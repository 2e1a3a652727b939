pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyses",
            post(handlers::handle_analyze).get(handlers::handle_list_history),
        )
        .route("/api/v1/analyses/current", get(handlers::handle_current))
        .route(
            "/api/v1/analyses/:id",
            get(handlers::handle_get_analysis).delete(handlers::handle_delete),
        )
        .route("/api/v1/analyses/:id/open", post(handlers::handle_open))
        .route(
            "/api/v1/analyses/:id/confidence",
            patch(handlers::handle_toggle_confidence),
        )
        .route("/api/v1/analyses/:id/export", get(handlers::handle_export))
        .with_state(state)
}
