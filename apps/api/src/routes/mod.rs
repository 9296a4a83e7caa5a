pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidates::handlers::handle_candidates;
use crate::inference::handlers::{handle_feedback, handle_summarize};
use crate::resume::handlers::handle_extract_sections;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate API: tagged store/query dispatch
        .route("/api/v1/candidates", post(handle_candidates))
        // Resume API: PDF upload → section map
        .route("/api/v1/resume/sections", post(handle_extract_sections))
        // AI text tasks
        .route("/api/v1/summarize", post(handle_summarize))
        .route("/api/v1/feedback", post(handle_feedback))
        .with_state(state)
}
