pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::message::handlers as message_handlers;
use crate::profile::handlers as profile_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/extract-profile-content",
            post(profile_handlers::handle_extract_profile_content),
        )
        .route(
            "/api/v1/linkedin-profile",
            get(profile_handlers::handle_linkedin_profile),
        )
        .route(
            "/api/v1/parse-resume",
            post(resume_handlers::handle_parse_resume),
        )
        .route(
            "/api/v1/generate-message",
            post(message_handlers::handle_generate_message),
        )
        .with_state(state)
}
