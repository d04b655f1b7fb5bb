use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::assistant::{respond, AssistantReply};
use crate::errors::AppError;
use crate::matching::{filter_candidates, FilterCriteria};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistantQueryRequest {
    /// The posting the recruiter is working on. Required: the assistant only
    /// answers in the context of a selected job.
    #[serde(default)]
    pub job_id: Option<Uuid>,
    pub query: String,
    /// Narrows the catalog before the assistant looks at it.
    #[serde(default)]
    pub criteria: FilterCriteria,
}

/// POST /api/v1/assistant/query
pub async fn handle_assistant_query(
    State(state): State<AppState>,
    Json(req): Json<AssistantQueryRequest>,
) -> Result<Json<AssistantReply>, AppError> {
    let job_id = req.job_id.ok_or_else(|| {
        AppError::Validation("Select a job posting before asking the assistant".to_string())
    })?;

    let jobs = state.store.get_jobs().await?;
    let job = jobs
        .iter()
        .find(|j| j.id == job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let pool = filter_candidates(state.pool.as_ref().clone(), &req.criteria);
    let reply = respond(&req.query, job, &pool, state.selector.as_ref())?;

    tracing::info!(
        job_id = %job_id,
        selected = reply.selected.len(),
        strategy = reply.strategy,
        "assistant query answered"
    );
    Ok(Json(reply))
}
