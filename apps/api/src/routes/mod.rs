pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/questions",
            get(handlers::handle_list_questions),
        )
        .route(
            "/api/v1/assessments",
            post(handlers::handle_submit_assessment).get(handlers::handle_list_assessments),
        )
        .route(
            "/api/v1/assessments/:id",
            get(handlers::handle_get_assessment),
        )
        .with_state(state)
}
