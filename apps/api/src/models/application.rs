use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionAnswer {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// Links a candidate to a posting, with the motivation letter and the
/// answers to that posting's custom screening questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    #[serde(default)]
    pub motivation_letter: String,
    #[serde(default)]
    pub answers: Vec<QuestionAnswer>,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
}
