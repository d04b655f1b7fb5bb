use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::warn;

use super::{keys, CollectionStore};
use crate::models::{
    Application, CandidateMessage, CandidateProfile, Interview, JobPosting, SessionUser,
};

/// In-memory store keyed the same way as the file-backed one.
/// The substitute used by handler tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        let value = entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Discarding unparseable '{key}' entry: {e}");
                None
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn get_jobs(&self) -> Result<Vec<JobPosting>> {
        Ok(self.read(keys::RECRUITER_JOBS).await.unwrap_or_default())
    }

    async fn put_jobs(&self, jobs: &[JobPosting]) -> Result<()> {
        self.write(keys::RECRUITER_JOBS, &jobs).await
    }

    async fn get_applications(&self) -> Result<Vec<Application>> {
        Ok(self.read(keys::APPLICATIONS).await.unwrap_or_default())
    }

    async fn put_applications(&self, applications: &[Application]) -> Result<()> {
        self.write(keys::APPLICATIONS, &applications).await
    }

    async fn get_interviews(&self) -> Result<Vec<Interview>> {
        Ok(self
            .read(keys::SCHEDULED_INTERVIEWS)
            .await
            .unwrap_or_default())
    }

    async fn put_interviews(&self, interviews: &[Interview]) -> Result<()> {
        self.write(keys::SCHEDULED_INTERVIEWS, &interviews).await
    }

    async fn get_messages(&self) -> Result<Vec<CandidateMessage>> {
        Ok(self
            .read(keys::CANDIDATE_MESSAGES)
            .await
            .unwrap_or_default())
    }

    async fn put_messages(&self, messages: &[CandidateMessage]) -> Result<()> {
        self.write(keys::CANDIDATE_MESSAGES, &messages).await
    }

    async fn get_profile(&self) -> Result<Option<CandidateProfile>> {
        Ok(self.read(keys::USER_PROFILE).await)
    }

    async fn put_profile(&self, profile: &CandidateProfile) -> Result<()> {
        self.write(keys::USER_PROFILE, profile).await
    }

    async fn get_session(&self) -> Result<Option<SessionUser>> {
        Ok(self.read(keys::USER).await)
    }

    async fn put_session(&self, user: &SessionUser) -> Result<()> {
        self.write(keys::USER, user).await
    }

    async fn clear_session(&self) -> Result<()> {
        self.remove(keys::USER).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationStatus, UserRole};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn make_application(job_id: Uuid) -> Application {
        Application {
            id: Uuid::new_v4(),
            job_id,
            applicant_id: Uuid::new_v4(),
            motivation_letter: "I am a strong fit for this role.".to_string(),
            answers: vec![],
            status: ApplicationStatus::Pending,
            applied_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_missing_key_reads_as_empty_collection() {
        let store = MemoryStore::new();
        assert!(store.get_applications().await.unwrap().is_empty());
        assert!(store.get_jobs().await.unwrap().is_empty());
        assert!(store.get_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_collection_round_trip_preserves_order() {
        let store = MemoryStore::new();
        let apps = vec![
            make_application(Uuid::new_v4()),
            make_application(Uuid::new_v4()),
            make_application(Uuid::new_v4()),
        ];
        store.put_applications(&apps).await.unwrap();
        assert_eq!(store.get_applications().await.unwrap(), apps);
    }

    #[tokio::test]
    async fn test_put_replaces_whole_collection() {
        let store = MemoryStore::new();
        let first = vec![make_application(Uuid::new_v4())];
        let second = vec![make_application(Uuid::new_v4())];
        store.put_applications(&first).await.unwrap();
        store.put_applications(&second).await.unwrap();
        assert_eq!(store.get_applications().await.unwrap(), second);
    }

    #[tokio::test]
    async fn test_session_clear() {
        let store = MemoryStore::new();
        let user = SessionUser {
            id: Uuid::new_v4(),
            full_name: "Kenza Bouzidi".to_string(),
            email: "kenza.bouzidi@email.com".to_string(),
            role: UserRole::Recruiter,
        };
        store.put_session(&user).await.unwrap();
        assert_eq!(store.get_session().await.unwrap(), Some(user));
        store.clear_session().await.unwrap();
        assert!(store.get_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unparseable_entry_degrades_to_empty() {
        let store = MemoryStore::new();
        store
            .entries
            .write()
            .await
            .insert(keys::APPLICATIONS.to_string(), serde_json::json!("not an array"));
        assert!(store.get_applications().await.unwrap().is_empty());
    }
}
