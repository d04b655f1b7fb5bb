use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::{filter_jobs, FilterCriteria};
use crate::models::{AgeRange, JobPosting, JobStatus};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobRequest {
    pub title: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skill_tags: Vec<String>,
    #[serde(default)]
    pub age_limit: Option<AgeRange>,
    #[serde(default)]
    pub custom_questions: Vec<String>,
}

impl JobRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Job title is required".to_string()));
        }
        if self.company.trim().is_empty() {
            return Err(AppError::Validation("Company name is required".to_string()));
        }
        if let Some(range) = &self.age_limit {
            if range.min > range.max {
                return Err(AppError::Validation(
                    "Age limit minimum cannot exceed maximum".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let jobs = state.store.get_jobs().await?;
    Ok(Json(jobs))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<JobRequest>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    req.validate()?;

    let job = JobPosting {
        id: Uuid::new_v4(),
        title: req.title,
        company: req.company,
        industry: req.industry,
        location: req.location,
        description: req.description,
        requirements: req.requirements,
        skill_tags: req.skill_tags,
        posted_date: Utc::now().date_naive(),
        age_limit: req.age_limit,
        custom_questions: req.custom_questions,
        status: JobStatus::Open,
        applicant_count: 0,
        created_at: Utc::now(),
    };

    let mut jobs = state.store.get_jobs().await?;
    jobs.push(job.clone());
    state.store.put_jobs(&jobs).await?;

    tracing::info!(job_id = %job.id, title = %job.title, "posting created");
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<JobRequest>,
) -> Result<Json<JobPosting>, AppError> {
    req.validate()?;

    let mut jobs = state.store.get_jobs().await?;
    let job = jobs
        .iter_mut()
        .find(|j| j.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    job.title = req.title;
    job.company = req.company;
    job.industry = req.industry;
    job.location = req.location;
    job.description = req.description;
    job.requirements = req.requirements;
    job.skill_tags = req.skill_tags;
    job.age_limit = req.age_limit;
    job.custom_questions = req.custom_questions;

    let updated = job.clone();
    state.store.put_jobs(&jobs).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut jobs = state.store.get_jobs().await?;
    let before = jobs.len();
    jobs.retain(|j| j.id != id);
    if jobs.len() == before {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }
    state.store.put_jobs(&jobs).await?;
    tracing::info!(job_id = %id, "posting deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/jobs/:id/duplicate
pub async fn handle_duplicate_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    let mut jobs = state.store.get_jobs().await?;
    let copy = jobs
        .iter()
        .find(|j| j.id == id)
        .map(JobPosting::duplicate)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    jobs.push(copy.clone());
    state.store.put_jobs(&jobs).await?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// POST /api/v1/jobs/:id/toggle
pub async fn handle_toggle_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobPosting>, AppError> {
    let mut jobs = state.store.get_jobs().await?;
    let job = jobs
        .iter_mut()
        .find(|j| j.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    job.toggle_status();
    let toggled = job.clone();
    state.store.put_jobs(&jobs).await?;
    Ok(Json(toggled))
}

/// POST /api/v1/jobs/filter
pub async fn handle_filter_jobs(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let jobs = state.store.get_jobs().await?;
    Ok(Json(filter_jobs(jobs, &criteria)))
}
