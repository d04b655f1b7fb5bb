//! Query responder: classifies a free-text query and answers with an
//! explanation plus, for selection intents, a subset of the filtered pool.
//!
//! The explanation is templated from the actual selection and pool, not
//! canned independently of it.

use std::collections::HashMap;

use serde::Serialize;

use super::intent::QueryIntent;
use super::selection::SelectionStrategy;
use crate::errors::AppError;
use crate::models::{CandidateProfile, JobPosting};

#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub explanation: String,
    pub selected: Vec<CandidateProfile>,
    /// Which selection strategy produced `selected`, for transparency.
    pub strategy: &'static str,
}

/// Answers a recruiter query against the already-filtered candidate pool.
///
/// A whitespace-only query is a validation error; nothing is selected and no
/// state is touched.
pub fn respond(
    query: &str,
    job: &JobPosting,
    pool: &[CandidateProfile],
    strategy: &dyn SelectionStrategy,
) -> Result<AssistantReply, AppError> {
    if query.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a question or request for the assistant".to_string(),
        ));
    }

    let reply = match QueryIntent::classify(query) {
        QueryIntent::TopCandidates(n) => {
            let selected = strategy.select(pool, job, n);
            AssistantReply {
                explanation: top_candidates_text(&selected, n, &job.title),
                selected,
                strategy: strategy.name(),
            }
        }
        intent => AssistantReply {
            explanation: informational_text(intent, job, pool),
            selected: Vec::new(),
            strategy: strategy.name(),
        },
    };

    Ok(reply)
}

fn top_candidates_text(selected: &[CandidateProfile], requested: usize, job_title: &str) -> String {
    if selected.is_empty() {
        return format!(
            "No candidates match your current filters for {job_title}. \
             Broaden the filters and ask again."
        );
    }

    let names: Vec<&str> = selected.iter().map(|c| c.full_name.as_str()).collect();
    let names = names.join(", ");

    if requested >= 5 {
        format!(
            "I've selected these {} candidates: {names}. I chose them because they \
             demonstrate strong technical skills, excellent communication abilities, and \
             relevant experience that aligns with your job requirements. Their profiles \
             show consistent career progression and diverse skill sets, plus proficiency \
             in multiple languages, which is valuable for international projects.",
            selected.len()
        )
    } else {
        format!(
            "I've selected these {} top candidates: {names}. These candidates stand out \
             due to their technical expertise, proven track record, and strong \
             communication skills that make them ideal for your role.",
            selected.len()
        )
    }
}

fn informational_text(intent: QueryIntent, job: &JobPosting, pool: &[CandidateProfile]) -> String {
    match intent {
        QueryIntent::Filtering => format!(
            "Based on your current {} applications for {}, I can help you filter by \
             experience level, skills, and location. I recommend focusing on candidates \
             with relevant experience for this position.",
            pool.len(),
            job.title
        ),
        QueryIntent::InterviewScheduling => format!(
            "I recommend scheduling interviews with the top candidates who match your \
             requirements for {}. Based on the applications, the best time slots are \
             Tuesday-Thursday, 10 AM-4 PM.",
            job.title
        ),
        QueryIntent::SalaryBenchmark => format!(
            "Based on current market data in Morocco, salary ranges for {} roles in {} \
             are competitive. I recommend staying within the market range to attract \
             quality candidates.",
            job.title, job.location
        ),
        QueryIntent::SkillsGap => skills_gap_text(pool),
        // TopCandidates handled by the caller; classify() cannot hand it here.
        QueryIntent::TopCandidates(_) | QueryIntent::General => format!(
            "I can help you analyze candidates for {}, suggest the best matches, filter \
             applications, and provide insights about your applicant pool. Try asking \
             about 'best 5 candidates', 'top 3 candidates', 'filtering options', or \
             'interview scheduling' for specific insights about your {} applications.",
            job.title,
            pool.len()
        ),
    }
}

/// Names the most frequent skills actually present in the pool.
fn skills_gap_text(pool: &[CandidateProfile]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for candidate in pool {
        for skill in &candidate.skills {
            *counts.entry(skill.name.as_str()).or_insert(0) += 1;
        }
    }

    if counts.is_empty() {
        return "There is not enough skill data in the current applicant pool to \
                analyze gaps. Broaden the filters and ask again."
            .to_string();
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let top: Vec<&str> = ranked.iter().take(3).map(|(name, _)| *name).collect();

    format!(
        "Analysis shows that your applicants are strongest in {}. Skills outside this \
         set are underrepresented; consider offering training or adjusting requirements \
         to widen the candidate pool.",
        top.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::selection::{RandomSelection, SkillOverlapSelection};
    use crate::models::{JobStatus, SkillEntry};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn make_candidate(name: &str, skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            email: format!("{name}@email.com"),
            phone: String::new(),
            location: "Rabat".to_string(),
            professional_summary: String::new(),
            skills: skills
                .iter()
                .map(|s| SkillEntry {
                    name: s.to_string(),
                    rating: 4,
                    years_of_experience: 3,
                })
                .collect(),
            languages: vec![],
            education: vec![],
            work_experience: vec![],
            certifications: vec![],
            projects: vec![],
        }
    }

    fn make_job() -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: "Digital Marketing Manager".to_string(),
            company: "Maroc Digital Agency".to_string(),
            industry: "Marketing".to_string(),
            location: "Rabat".to_string(),
            description: String::new(),
            requirements: vec![],
            skill_tags: vec!["SEO".to_string(), "Social Media".to_string()],
            posted_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            age_limit: None,
            custom_questions: vec![],
            status: JobStatus::Open,
            applicant_count: 0,
            created_at: Utc::now(),
        }
    }

    fn pool(names: &[&str]) -> Vec<CandidateProfile> {
        names.iter().map(|n| make_candidate(n, &["SEO"])).collect()
    }

    #[test]
    fn test_whitespace_query_rejected() {
        let err = respond("   \t ", &make_job(), &pool(&["A"]), &RandomSelection).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_best_five_from_pool_of_two_returns_both_and_names_them() {
        let pool = pool(&["Kenza Bouzidi", "Ahmed Tazi"]);
        let reply = respond(
            "give me the best 5 candidates",
            &make_job(),
            &pool,
            &RandomSelection,
        )
        .unwrap();
        assert_eq!(reply.selected.len(), 2);
        assert!(reply.explanation.contains("Kenza Bouzidi"));
        assert!(reply.explanation.contains("Ahmed Tazi"));
    }

    #[test]
    fn test_best_five_from_large_pool_is_strict_subset_of_size_five() {
        let pool = pool(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let reply = respond("best 5 candidates", &make_job(), &pool, &RandomSelection).unwrap();
        assert_eq!(reply.selected.len(), 5);
        for candidate in &reply.selected {
            assert!(pool.iter().any(|c| c.id == candidate.id));
        }
    }

    #[test]
    fn test_top_three_uses_short_template() {
        let pool = pool(&["A", "B", "C", "D"]);
        let reply = respond("top 3 candidates", &make_job(), &pool, &SkillOverlapSelection).unwrap();
        assert_eq!(reply.selected.len(), 3);
        assert!(reply.explanation.contains("top candidates"));
        assert_eq!(reply.strategy, "skill_overlap");
    }

    #[test]
    fn test_empty_pool_selection_explains_no_match() {
        let reply = respond("best 5 candidates", &make_job(), &[], &RandomSelection).unwrap();
        assert!(reply.selected.is_empty());
        assert!(reply.explanation.contains("No candidates match"));
    }

    #[test]
    fn test_informational_intents_select_nothing() {
        let pool = pool(&["A", "B"]);
        for query in ["filter by location", "schedule interviews", "salary ranges"] {
            let reply = respond(query, &make_job(), &pool, &RandomSelection).unwrap();
            assert!(reply.selected.is_empty(), "query {query:?} selected candidates");
            assert!(!reply.explanation.is_empty());
        }
    }

    #[test]
    fn test_general_reply_mentions_job_and_count() {
        let pool = pool(&["A", "B", "C"]);
        let reply = respond("hello", &make_job(), &pool, &RandomSelection).unwrap();
        assert!(reply.explanation.contains("Digital Marketing Manager"));
        assert!(reply.explanation.contains('3'));
    }

    #[test]
    fn test_skills_gap_names_frequent_skills() {
        let pool = vec![
            make_candidate("A", &["SEO", "Content Writing"]),
            make_candidate("B", &["SEO"]),
            make_candidate("C", &["Excel"]),
        ];
        let reply = respond("skills gap?", &make_job(), &pool, &RandomSelection).unwrap();
        assert!(reply.explanation.contains("SEO"));
    }
}
