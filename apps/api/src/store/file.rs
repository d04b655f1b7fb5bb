use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::{info, warn};

use super::{keys, CollectionStore};
use crate::models::{
    Application, CandidateMessage, CandidateProfile, Interview, JobPosting, SessionUser,
};

/// File-backed store: one `<key>.json` per collection under the data
/// directory. Reads parse the whole file; writes overwrite it. No schema
/// versioning, no migration.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        info!("Collection store at {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Discarding unparseable {}: {e}", path.display());
                None
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let raw = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize '{key}'"))?;
        fs::write(&path, raw)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
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
        self.remove(keys::USER).await
    }
}
