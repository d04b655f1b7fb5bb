use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewFormat {
    Online,
    InPerson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interview {
    pub id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_title: String,
    pub date: NaiveDate,
    /// Slot like "10:00"; see the schedule handler for the valid set.
    pub time: String,
    pub format: InterviewFormat,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub message: String,
    pub status: InterviewStatus,
    pub created_at: DateTime<Utc>,
}

/// Inbox notification written for the candidate alongside an interview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateMessage {
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub interview_date: NaiveDate,
    pub interview_time: String,
    pub location: String,
    pub format: InterviewFormat,
    #[serde(default)]
    pub message: String,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}
