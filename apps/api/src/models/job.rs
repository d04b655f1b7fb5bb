use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    Closed,
}

/// Optional age constraint a posting may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skill_tags: Vec<String>,
    pub posted_date: NaiveDate,
    #[serde(default)]
    pub age_limit: Option<AgeRange>,
    #[serde(default)]
    pub custom_questions: Vec<String>,
    pub status: JobStatus,
    #[serde(default)]
    pub applicant_count: u32,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }

    /// Fresh copy of this posting: new id, "(Copy)" suffix, zero applicants.
    pub fn duplicate(&self) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: format!("{} (Copy)", self.title),
            status: JobStatus::Open,
            applicant_count: 0,
            created_at: Utc::now(),
            ..self.clone()
        }
    }

    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            JobStatus::Open => JobStatus::Closed,
            JobStatus::Closed => JobStatus::Open,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_job(title: &str) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "TechMorocco Solutions".to_string(),
            industry: "Technology".to_string(),
            location: "Casablanca".to_string(),
            description: "Full-stack role".to_string(),
            requirements: vec!["5+ years of experience".to_string()],
            skill_tags: vec!["JavaScript".to_string(), "React".to_string()],
            posted_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            age_limit: None,
            custom_questions: vec![],
            status: JobStatus::Open,
            applicant_count: 18,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_duplicate_gets_new_id_and_copy_suffix() {
        let job = make_job("Senior Full Stack Developer");
        let copy = job.duplicate();
        assert_ne!(copy.id, job.id);
        assert_eq!(copy.title, "Senior Full Stack Developer (Copy)");
        assert_eq!(copy.applicant_count, 0);
        assert_eq!(copy.status, JobStatus::Open);
        assert_eq!(copy.skill_tags, job.skill_tags);
    }

    #[test]
    fn test_toggle_status_round_trips() {
        let mut job = make_job("UX/UI Designer");
        job.toggle_status();
        assert_eq!(job.status, JobStatus::Closed);
        job.toggle_status();
        assert_eq!(job.status, JobStatus::Open);
    }

    #[test]
    fn test_age_limit_absent_by_default_in_json() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "title": "Financial Analyst",
            "company": "Casablanca Finance Group",
            "industry": "Finance",
            "location": "Casablanca",
            "description": "Investment analysis",
            "posted_date": "2024-01-12",
            "status": "open",
            "created_at": Utc::now(),
        });
        let job: JobPosting = serde_json::from_value(json).unwrap();
        assert!(job.age_limit.is_none());
        assert!(job.requirements.is_empty());
        assert_eq!(job.applicant_count, 0);
    }
}
