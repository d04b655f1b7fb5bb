//! Fake session endpoints.
//!
//! There is no authentication: login records who the user claims to be,
//! logout erases it. The record only drives which dashboard a client shows.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{SessionUser, UserRole};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

/// POST /api/v1/session/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionUser>, AppError> {
    if req.full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".to_string()));
    }
    if !req.email.contains('@') {
        return Err(AppError::Validation(
            "A valid email address is required".to_string(),
        ));
    }

    let user = SessionUser {
        id: Uuid::new_v4(),
        full_name: req.full_name,
        email: req.email,
        role: req.role,
    };
    state.store.put_session(&user).await?;

    tracing::info!(user_id = %user.id, role = ?user.role, "session opened");
    Ok(Json(user))
}

/// GET /api/v1/session
pub async fn handle_current_session(
    State(state): State<AppState>,
) -> Result<Json<SessionUser>, AppError> {
    let user = state
        .store
        .get_session()
        .await?
        .ok_or_else(|| AppError::NotFound("No active session".to_string()))?;
    Ok(Json(user))
}

/// POST /api/v1/session/logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.clear_session().await?;
    Ok(StatusCode::NO_CONTENT)
}
