pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::experience::handlers as experience;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(resume::handle_get_resume))
        .route("/api/v1/experience", get(experience::handle_get_experience))
        .route(
            "/api/v1/experience/skills",
            get(experience::handle_get_skills),
        )
        .route(
            "/api/v1/experience/aggregate",
            post(experience::handle_aggregate),
        )
        .with_state(state)
}
