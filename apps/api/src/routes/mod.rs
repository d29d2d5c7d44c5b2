pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route(
            "/api/v1/interview/question",
            post(handlers::handle_generate_question),
        )
        .route(
            "/api/v1/interview/feedback",
            post(handlers::handle_generate_feedback),
        )
        .with_state(state)
}
