//! Filter predicate engine.
//!
//! Every predicate is pure and side-effect-free. Dimensions compose by
//! sequential narrowing (AND), and since each predicate is independent the
//! application order never changes the result. An empty or absent criterion
//! is a pass-through, never an error: `filter_*(items, &default)` is the
//! identity.

use serde::Deserialize;

use super::experience::total_experience_years;
use crate::models::{CandidateProfile, JobPosting};

/// One criteria record serves both engines. Candidate filtering reads
/// `location`, `skills`, and `min_experience_years`; job filtering reads
/// `search`, `location`, `skills`, and `industry`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub industry: Option<String>,
    pub min_experience_years: Option<u32>,
    pub search: Option<String>,
}

impl FilterCriteria {
    fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    fn industry(&self) -> Option<&str> {
        non_blank(self.industry.as_deref())
    }

    fn search(&self) -> Option<&str> {
        non_blank(self.search.as_deref())
    }

    fn skills(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str).filter(|s| !s.trim().is_empty())
    }

    fn has_skills(&self) -> bool {
        self.skills().next().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn candidate_matches_location(candidate: &CandidateProfile, location: &str) -> bool {
    contains_ci(&candidate.location, location)
}

/// OR across requested skills, OR across the candidate's own skill entries.
pub fn candidate_matches_skills<'a>(
    candidate: &CandidateProfile,
    mut skills: impl Iterator<Item = &'a str>,
) -> bool {
    skills.any(|wanted| {
        candidate
            .skills
            .iter()
            .any(|skill| contains_ci(&skill.name, wanted))
    })
}

pub fn candidate_meets_experience(candidate: &CandidateProfile, min_years: u32) -> bool {
    total_experience_years(candidate) >= min_years
}

/// Narrows a candidate collection by all specified criteria dimensions.
pub fn filter_candidates(
    candidates: Vec<CandidateProfile>,
    criteria: &FilterCriteria,
) -> Vec<CandidateProfile> {
    let mut filtered = candidates;

    if let Some(location) = criteria.location() {
        filtered.retain(|c| candidate_matches_location(c, location));
    }
    if criteria.has_skills() {
        filtered.retain(|c| candidate_matches_skills(c, criteria.skills()));
    }
    if let Some(min_years) = criteria.min_experience_years {
        filtered.retain(|c| candidate_meets_experience(c, min_years));
    }

    filtered
}

fn job_matches_search(job: &JobPosting, term: &str) -> bool {
    contains_ci(&job.title, term)
        || contains_ci(&job.company, term)
        || job.skill_tags.iter().any(|tag| contains_ci(tag, term))
}

fn job_matches_skills<'a>(job: &JobPosting, mut skills: impl Iterator<Item = &'a str>) -> bool {
    skills.any(|wanted| job.skill_tags.iter().any(|tag| contains_ci(tag, wanted)))
}

/// Narrows a posting collection by search term, location, skills, and industry.
pub fn filter_jobs(jobs: Vec<JobPosting>, criteria: &FilterCriteria) -> Vec<JobPosting> {
    let mut filtered = jobs;

    if let Some(term) = criteria.search() {
        filtered.retain(|j| job_matches_search(j, term));
    }
    if let Some(location) = criteria.location() {
        filtered.retain(|j| contains_ci(&j.location, location));
    }
    if criteria.has_skills() {
        filtered.retain(|j| job_matches_skills(j, criteria.skills()));
    }
    if let Some(industry) = criteria.industry() {
        filtered.retain(|j| contains_ci(&j.industry, industry));
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobStatus, SkillEntry, WorkExperienceEntry};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn make_candidate(name: &str, location: &str, skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
            phone: "+212 600000000".to_string(),
            location: location.to_string(),
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

    fn with_experience(mut candidate: CandidateProfile, text: &str) -> CandidateProfile {
        candidate.work_experience.push(WorkExperienceEntry {
            job_title: "Role".to_string(),
            company: "Company".to_string(),
            start_date: "2018".to_string(),
            end_date: "Present".to_string(),
            responsibilities: text.to_string(),
            years: None,
        });
        candidate
    }

    fn make_job(title: &str, location: &str, industry: &str, tags: &[&str]) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Atlas Technologies".to_string(),
            industry: industry.to_string(),
            location: location.to_string(),
            description: String::new(),
            requirements: vec![],
            skill_tags: tags.iter().map(|t| t.to_string()).collect(),
            posted_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            age_limit: None,
            custom_questions: vec![],
            status: JobStatus::Open,
            applicant_count: 0,
            created_at: Utc::now(),
        }
    }

    fn pool() -> Vec<CandidateProfile> {
        vec![
            with_experience(
                make_candidate("Youssef El Mansouri", "Casablanca", &["JavaScript", "React"]),
                "7 years building scalable web applications",
            ),
            with_experience(
                make_candidate("Kenza Bouzidi", "Rabat", &["SEO", "Social Media Marketing"]),
                "5+ years of campaign management",
            ),
            make_candidate("Salma Benali", "Marrakech", &["Figma", "User Research"]),
        ]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let candidates = pool();
        let result = filter_candidates(candidates.clone(), &FilterCriteria::default());
        assert_eq!(result, candidates);
    }

    #[test]
    fn test_blank_criteria_strings_are_identity() {
        let candidates = pool();
        let criteria = FilterCriteria {
            location: Some("   ".to_string()),
            skills: vec![String::new()],
            ..Default::default()
        };
        assert_eq!(filter_candidates(candidates.clone(), &criteria), candidates);
    }

    #[test]
    fn test_location_substring_case_insensitive() {
        let criteria = FilterCriteria {
            location: Some("casa".to_string()),
            ..Default::default()
        };
        let result = filter_candidates(pool(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].full_name, "Youssef El Mansouri");
    }

    #[test]
    fn test_skills_filter_soundness_and_completeness() {
        let candidates = pool();
        let criteria = FilterCriteria {
            skills: vec!["react".to_string(), "seo".to_string()],
            ..Default::default()
        };
        let result = filter_candidates(candidates.clone(), &criteria);

        // Soundness: everything kept has at least one matching skill.
        for kept in &result {
            assert!(candidate_matches_skills(kept, criteria.skills()));
        }
        // Completeness: everything dropped has none.
        for candidate in &candidates {
            if !result.contains(candidate) {
                assert!(!candidate_matches_skills(candidate, criteria.skills()));
            }
        }
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_min_experience_uses_extracted_years() {
        let criteria = FilterCriteria {
            min_experience_years: Some(3),
            ..Default::default()
        };
        let result = filter_candidates(pool(), &criteria);
        // Salma has no work history, so no derivable years: treated as 0.
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.full_name != "Salma Benali"));
    }

    #[test]
    fn test_positive_threshold_excludes_zero_experience() {
        let criteria = FilterCriteria {
            min_experience_years: Some(1),
            ..Default::default()
        };
        let result = filter_candidates(vec![make_candidate("Omar Idrissi", "Fes", &[])], &criteria);
        assert!(result.is_empty());
    }

    #[test]
    fn test_dimensions_compose_with_and_semantics() {
        let criteria = FilterCriteria {
            location: Some("Casablanca".to_string()),
            skills: vec!["SEO".to_string()],
            ..Default::default()
        };
        // Youssef matches location but not skills; Kenza the reverse.
        assert!(filter_candidates(pool(), &criteria).is_empty());
    }

    #[test]
    fn test_filter_order_does_not_change_result() {
        let criteria = FilterCriteria {
            location: Some("a".to_string()),
            skills: vec!["marketing".to_string()],
            min_experience_years: Some(2),
            ..Default::default()
        };
        let candidates = pool();
        let by_pipeline = filter_candidates(candidates.clone(), &criteria);

        // Same predicates applied in reverse order by hand.
        let mut manual = candidates;
        manual.retain(|c| candidate_meets_experience(c, 2));
        manual.retain(|c| candidate_matches_skills(c, criteria.skills()));
        manual.retain(|c| candidate_matches_location(c, "a"));
        assert_eq!(by_pipeline, manual);
    }

    #[test]
    fn test_job_filter_by_industry_and_location() {
        let jobs = vec![
            make_job("Financial Analyst", "Casablanca", "Finance", &["Excel"]),
            make_job("UX/UI Designer", "Casablanca", "Design", &["Figma"]),
            make_job("Agricultural Engineer", "Meknes", "Agriculture", &["Agronomy"]),
        ];
        let criteria = FilterCriteria {
            location: Some("Casablanca".to_string()),
            industry: Some("finance".to_string()),
            ..Default::default()
        };
        let result = filter_jobs(jobs, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Financial Analyst");
    }

    #[test]
    fn test_job_search_spans_title_company_and_tags() {
        let jobs = vec![
            make_job("Senior Full Stack Developer", "Casablanca", "Technology", &["React"]),
            make_job("Digital Marketing Manager", "Rabat", "Marketing", &["SEO"]),
        ];
        let criteria = FilterCriteria {
            search: Some("react".to_string()),
            ..Default::default()
        };
        let result = filter_jobs(jobs.clone(), &criteria);
        assert_eq!(result.len(), 1);

        let criteria = FilterCriteria {
            search: Some("atlas".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_jobs(jobs, &criteria).len(), 2);
    }

    #[test]
    fn test_job_empty_criteria_is_identity() {
        let jobs = vec![make_job("Position 1", "Oujda", "Tourism", &[])];
        assert_eq!(filter_jobs(jobs.clone(), &FilterCriteria::default()), jobs);
    }
}
