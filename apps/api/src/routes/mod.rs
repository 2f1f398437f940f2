pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::agent::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Agent API
        .route("/api/v1/agent/plan", post(handlers::handle_plan))
        .route("/api/v1/agent/run", post(handlers::handle_run))
        .with_state(state)
}
