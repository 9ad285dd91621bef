pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Largest accepted request body (résumé uploads).
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume/analyze", post(resume::handle_analyze))
        // Matching API
        .route("/api/v1/match", post(matching::handle_match_upload))
        .route("/api/v1/match/profile", post(matching::handle_match_profile))
        .route("/api/v1/match/export", post(matching::handle_match_export))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
