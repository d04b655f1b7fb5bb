pub mod applications;
pub mod assistant;
pub mod health;
pub mod interviews;
pub mod jobs;
pub mod messages;
pub mod profile;
pub mod session;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recruiter job board
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/v1/jobs/:id",
            put(jobs::handle_update_job).delete(jobs::handle_delete_job),
        )
        .route("/api/v1/jobs/:id/duplicate", post(jobs::handle_duplicate_job))
        .route("/api/v1/jobs/:id/toggle", post(jobs::handle_toggle_job))
        .route("/api/v1/jobs/filter", post(jobs::handle_filter_jobs))
        .route(
            "/api/v1/jobs/:id/candidates",
            post(applications::handle_filter_candidates),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications)
                .post(applications::handle_submit_application),
        )
        // Interviews and the candidate inbox
        .route(
            "/api/v1/interviews",
            get(interviews::handle_list_interviews).post(interviews::handle_schedule_interview),
        )
        .route("/api/v1/messages", get(messages::handle_list_messages))
        .route(
            "/api/v1/messages/:id/confirm",
            post(messages::handle_confirm_message),
        )
        // Candidate profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_put_profile),
        )
        // Fake session
        .route("/api/v1/session", get(session::handle_current_session))
        .route("/api/v1/session/login", post(session::handle_login))
        .route("/api/v1/session/logout", post(session::handle_logout))
        // Assistant
        .route(
            "/api/v1/assistant/query",
            post(assistant::handle_assistant_query),
        )
        .with_state(state)
}
