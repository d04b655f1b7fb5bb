//! Keyed JSON collection store.
//!
//! Collections are read and written wholesale per key: a read parses the full
//! collection, a write replaces it. Concurrent writers are last-write-wins
//! with no coordination. Missing or unparseable data degrades to an empty
//! collection, never an error.
//!
//! Handlers depend on the `CollectionStore` trait so tests can inject
//! `MemoryStore` in place of the file-backed store.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{
    Application, CandidateMessage, CandidateProfile, Interview, JobPosting, SessionUser,
};

/// Storage keys, one JSON collection per key.
pub mod keys {
    pub const USER: &str = "user";
    pub const APPLICATIONS: &str = "applications";
    pub const RECRUITER_JOBS: &str = "recruiterJobs";
    pub const SCHEDULED_INTERVIEWS: &str = "scheduledInterviews";
    pub const CANDIDATE_MESSAGES: &str = "candidateMessages";
    pub const USER_PROFILE: &str = "userProfile";
}

#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn get_jobs(&self) -> Result<Vec<JobPosting>>;
    async fn put_jobs(&self, jobs: &[JobPosting]) -> Result<()>;

    async fn get_applications(&self) -> Result<Vec<Application>>;
    async fn put_applications(&self, applications: &[Application]) -> Result<()>;

    async fn get_interviews(&self) -> Result<Vec<Interview>>;
    async fn put_interviews(&self, interviews: &[Interview]) -> Result<()>;

    async fn get_messages(&self) -> Result<Vec<CandidateMessage>>;
    async fn put_messages(&self, messages: &[CandidateMessage]) -> Result<()>;

    async fn get_profile(&self) -> Result<Option<CandidateProfile>>;
    async fn put_profile(&self, profile: &CandidateProfile) -> Result<()>;

    async fn get_session(&self) -> Result<Option<SessionUser>>;
    async fn put_session(&self, user: &SessionUser) -> Result<()>;
    async fn clear_session(&self) -> Result<()>;
}
