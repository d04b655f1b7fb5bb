use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::CandidateMessage;
use crate::state::AppState;

/// GET /api/v1/messages
pub async fn handle_list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateMessage>>, AppError> {
    let messages = state.store.get_messages().await?;
    Ok(Json(messages))
}

/// POST /api/v1/messages/:id/confirm
///
/// Marks the invitation as confirmed. Confirming twice is a no-op.
pub async fn handle_confirm_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateMessage>, AppError> {
    let mut messages = state.store.get_messages().await?;
    let message = messages
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Message {id} not found")))?;

    message.confirmed = true;
    let confirmed = message.clone();
    state.store.put_messages(&messages).await?;

    tracing::info!(message_id = %id, "interview invitation confirmed");
    Ok(Json(confirmed))
}
