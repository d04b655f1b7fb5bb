use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    CandidateMessage, Interview, InterviewFormat, InterviewStatus,
};
use crate::state::AppState;

/// Bookable half-hour slots, mornings and afternoons.
const TIME_SLOTS: &[&str] = &[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00",
];

#[derive(Debug, Deserialize)]
pub struct ScheduleInterviewRequest {
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub candidate_email: String,
    pub date: NaiveDate,
    pub time: String,
    pub format: InterviewFormat,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleInterviewResponse {
    pub interview: Interview,
    pub message: CandidateMessage,
}

fn default_invitation(candidate_name: &str, job_title: &str, company: &str) -> String {
    format!(
        "Dear {candidate_name},\n\nWe are pleased to invite you for an interview for the \
         position of {job_title} at {company}.\n\nPlease confirm your availability for the \
         scheduled time.\n\nBest regards,\nRecruiting Team"
    )
}

/// POST /api/v1/interviews
///
/// Writes the interview record and, in the same operation, the candidate's
/// inbox notification. An in-person interview must carry a location.
pub async fn handle_schedule_interview(
    State(state): State<AppState>,
    Json(req): Json<ScheduleInterviewRequest>,
) -> Result<(StatusCode, Json<ScheduleInterviewResponse>), AppError> {
    if req.candidate_name.trim().is_empty() {
        return Err(AppError::Validation("Candidate name is required".to_string()));
    }
    if !TIME_SLOTS.contains(&req.time.as_str()) {
        return Err(AppError::Validation(format!(
            "'{}' is not a bookable time slot",
            req.time
        )));
    }

    let location = match req.format {
        InterviewFormat::InPerson => {
            let location = req
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .ok_or_else(|| {
                    AppError::Validation(
                        "A location is required for an in-person interview".to_string(),
                    )
                })?;
            location.to_string()
        }
        InterviewFormat::Online => "Online Meeting".to_string(),
    };

    let jobs = state.store.get_jobs().await?;
    let job = jobs
        .iter()
        .find(|j| j.id == req.job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", req.job_id)))?;

    let message_body = req
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| default_invitation(&req.candidate_name, &job.title, &job.company));

    let interview = Interview {
        id: Uuid::new_v4(),
        job_id: job.id,
        candidate_id: req.candidate_id,
        candidate_name: req.candidate_name,
        candidate_email: req.candidate_email,
        job_title: job.title.clone(),
        date: req.date,
        time: req.time.clone(),
        format: req.format,
        location: match req.format {
            InterviewFormat::InPerson => Some(location.clone()),
            InterviewFormat::Online => None,
        },
        message: message_body.clone(),
        status: InterviewStatus::Scheduled,
        created_at: Utc::now(),
    };

    let message = CandidateMessage {
        id: Uuid::new_v4(),
        job_title: job.title.clone(),
        company: job.company.clone(),
        interview_date: req.date,
        interview_time: req.time,
        location,
        format: req.format,
        message: message_body,
        confirmed: false,
        created_at: Utc::now(),
    };

    let mut interviews = state.store.get_interviews().await?;
    interviews.push(interview.clone());
    state.store.put_interviews(&interviews).await?;

    let mut messages = state.store.get_messages().await?;
    messages.push(message.clone());
    state.store.put_messages(&messages).await?;

    tracing::info!(
        interview_id = %interview.id,
        job_id = %interview.job_id,
        "interview scheduled"
    );
    Ok((
        StatusCode::CREATED,
        Json(ScheduleInterviewResponse { interview, message }),
    ))
}

/// GET /api/v1/interviews
pub async fn handle_list_interviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<Interview>>, AppError> {
    let interviews = state.store.get_interviews().await?;
    Ok(Json(interviews))
}
