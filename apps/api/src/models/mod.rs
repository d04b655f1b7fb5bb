pub mod application;
pub mod candidate;
pub mod interview;
pub mod job;
pub mod session;

pub use application::{Application, ApplicationStatus, QuestionAnswer};
pub use candidate::{
    CandidateProfile, CertificationEntry, EducationEntry, LanguageEntry, Proficiency,
    ProjectEntry, SkillEntry, WorkExperienceEntry,
};
pub use interview::{CandidateMessage, Interview, InterviewFormat, InterviewStatus};
pub use job::{AgeRange, JobPosting, JobStatus};
pub use session::{SessionUser, UserRole};
