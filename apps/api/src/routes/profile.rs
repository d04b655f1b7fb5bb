use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::CandidateProfile;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<CandidateProfile>, AppError> {
    let profile = state
        .store
        .get_profile()
        .await?
        .ok_or_else(|| AppError::NotFound("No profile has been saved yet".to_string()))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
///
/// Whole-record replacement, matching the store's collection semantics.
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<CandidateProfile>, AppError> {
    if profile.full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".to_string()));
    }
    if !profile.email.contains('@') {
        return Err(AppError::Validation(
            "A valid email address is required".to_string(),
        ));
    }

    state.store.put_profile(&profile).await?;
    Ok(Json(profile))
}
