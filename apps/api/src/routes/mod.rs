pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cover_letter::handlers as cover_letters;
use crate::interview::handlers as interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Cover letters
        .route(
            "/api/v1/cover-letters",
            get(cover_letters::handle_list).post(cover_letters::handle_generate),
        )
        .route(
            "/api/v1/cover-letters/:id",
            get(cover_letters::handle_get).delete(cover_letters::handle_delete),
        )
        // Interview prep
        .route("/api/v1/interview/quiz", post(interview::handle_generate_quiz))
        .route(
            "/api/v1/interview/assessments",
            get(interview::handle_list_assessments).post(interview::handle_save_result),
        )
        .with_state(state)
}
