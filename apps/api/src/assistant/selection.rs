//! Pluggable candidate selection.
//!
//! Selection is deliberately separated from the explanation text the
//! responder builds around it. `AppState` carries an `Arc<dyn
//! SelectionStrategy>`, swapped at startup via `SELECTION_STRATEGY`.

use rand::seq::SliceRandom;

use crate::models::{CandidateProfile, JobPosting};

pub trait SelectionStrategy: Send + Sync {
    /// Picks at most `min(limit, pool.len())` candidates from the pool.
    fn select(
        &self,
        pool: &[CandidateProfile],
        job: &JobPosting,
        limit: usize,
    ) -> Vec<CandidateProfile>;

    /// Label reported in responses, for transparency.
    fn name(&self) -> &'static str;
}

/// Uniform random permutation, then take the head.
pub struct RandomSelection;

impl SelectionStrategy for RandomSelection {
    fn select(
        &self,
        pool: &[CandidateProfile],
        _job: &JobPosting,
        limit: usize,
    ) -> Vec<CandidateProfile> {
        let mut shuffled: Vec<CandidateProfile> = pool.to_vec();
        shuffled.shuffle(&mut rand::thread_rng());
        shuffled.truncate(limit);
        shuffled
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Ranks by overlap between candidate skills and the posting's skill tags,
/// ties broken by name. Deterministic.
pub struct SkillOverlapSelection;

fn skill_overlap(candidate: &CandidateProfile, job: &JobPosting) -> usize {
    job.skill_tags
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            candidate
                .skills
                .iter()
                .any(|skill| skill.name.to_lowercase().contains(&tag))
        })
        .count()
}

impl SelectionStrategy for SkillOverlapSelection {
    fn select(
        &self,
        pool: &[CandidateProfile],
        job: &JobPosting,
        limit: usize,
    ) -> Vec<CandidateProfile> {
        let mut ranked: Vec<(usize, &CandidateProfile)> = pool
            .iter()
            .map(|candidate| (skill_overlap(candidate, job), candidate))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.full_name.cmp(&b.1.full_name)));
        ranked
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }

    fn name(&self) -> &'static str {
        "skill_overlap"
    }
}
