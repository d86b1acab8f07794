pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::fortune::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route(
            "/",
            get(handlers::handle_form_page).post(handlers::handle_form_submit),
        )
        // Fortune API
        .route("/api/v1/life-path", get(handlers::handle_life_path))
        .route("/api/v1/fortune", post(handlers::handle_fortune))
        .with_state(state)
}
