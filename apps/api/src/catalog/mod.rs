//! Static candidate and job catalog.
//!
//! The catalog is the read-only talent pool and posting board the rest of the
//! service draws from. Hand-authored entries live in `seed`; `generate` pads
//! the catalog to a configurable size with synthetic profiles.

pub mod generate;
pub mod seed;

use crate::models::{CandidateProfile, JobPosting};

/// Skills recognized across the platform. Generated profiles and postings
/// draw their tags from this list.
pub const AVAILABLE_SKILLS: &[&str] = &[
    "SEO",
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "Vue.js",
    "Angular",
    "Node.js",
    "Python",
    "Java",
    "PHP",
    "Designer",
    "UI/UX",
    "Graphic Design",
    "Photoshop",
    "Illustrator",
    "Marketing",
    "Digital Marketing",
    "Social Media",
    "Content Writing",
    "Financer",
    "Accounting",
    "Financial Analysis",
    "Budget Management",
    "Agriculture",
    "Agronomy",
    "Farming",
    "Livestock",
    "Project Management",
    "Teamwork",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Time Management",
    "French",
    "English",
    "Arabic",
    "Amazigh",
    "Spanish",
    "German",
    "Management",
    "Sales",
    "Customer Service",
    "Data Analysis",
    "Excel",
    "PowerPoint",
    "Presentation",
];

/// Seed candidates plus `extra` generated ones.
pub fn candidate_pool(extra: usize) -> Vec<CandidateProfile> {
    let mut pool = seed::seed_candidates();
    pool.extend(generate::generate_candidates(extra));
    pool
}

/// Seed postings plus `extra` generated ones.
pub fn job_board(extra: usize) -> Vec<JobPosting> {
    let mut board = seed::seed_jobs();
    board.extend(generate::generate_jobs(extra));
    board
}
