use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::{filter_candidates, FilterCriteria};
use crate::models::{Application, ApplicationStatus, CandidateProfile, QuestionAnswer};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitApplicationRequest {
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    pub motivation_letter: String,
    #[serde(default)]
    pub answers: Vec<QuestionAnswer>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationListQuery {
    #[serde(default)]
    pub job_id: Option<Uuid>,
}

/// POST /api/v1/applications
///
/// Rejects unknown job ids and postings that are closed. A successful submit
/// also bumps the posting's applicant count.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Json(req): Json<SubmitApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    if req.motivation_letter.trim().is_empty() {
        return Err(AppError::Validation(
            "A motivation letter is required".to_string(),
        ));
    }

    let mut jobs = state.store.get_jobs().await?;
    let job = jobs
        .iter_mut()
        .find(|j| j.id == req.job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", req.job_id)))?;

    if !job.is_open() {
        return Err(AppError::Conflict(format!(
            "Job '{}' is closed and no longer accepts applications",
            job.title
        )));
    }

    let application = Application {
        id: Uuid::new_v4(),
        job_id: req.job_id,
        applicant_id: req.applicant_id,
        motivation_letter: req.motivation_letter,
        answers: req.answers,
        status: ApplicationStatus::Pending,
        applied_date: Utc::now().date_naive(),
    };

    job.applicant_count += 1;
    state.store.put_jobs(&jobs).await?;

    let mut applications = state.store.get_applications().await?;
    applications.push(application.clone());
    state.store.put_applications(&applications).await?;

    tracing::info!(
        application_id = %application.id,
        job_id = %application.job_id,
        "application submitted"
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/applications?job_id=...
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(params): Query<ApplicationListQuery>,
) -> Result<Json<Vec<Application>>, AppError> {
    let mut applications = state.store.get_applications().await?;
    if let Some(job_id) = params.job_id {
        applications.retain(|a| a.job_id == job_id);
    }
    Ok(Json(applications))
}

/// POST /api/v1/jobs/:id/candidates
///
/// Filters the static candidate catalog by the supplied criteria, scoped to
/// an existing posting.
pub async fn handle_filter_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<Vec<CandidateProfile>>, AppError> {
    let jobs = state.store.get_jobs().await?;
    if !jobs.iter().any(|j| j.id == job_id) {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }

    let pool = state.pool.as_ref().clone();
    Ok(Json(filter_candidates(pool, &criteria)))
}
