//! Synthetic catalog entries, used to pad the seed data to a realistic size.

use chrono::{NaiveDate, Utc};
use rand::Rng;
use uuid::Uuid;

use super::AVAILABLE_SKILLS;
use crate::models::{
    CandidateProfile, EducationEntry, JobPosting, JobStatus, LanguageEntry, Proficiency,
    SkillEntry, WorkExperienceEntry,
};

const NAMES: &[&str] = &[
    "Aicha Benali",
    "Omar Idrissi",
    "Fatima Alaoui",
    "Khalid Berrada",
    "Zineb Fassi",
    "Mohamed Chraibi",
    "Salma Benkirane",
    "Anas Benjelloun",
    "Nadia Senhaji",
    "Rachid Alami",
    "Leila Tazi",
    "Yassine Bouchikhi",
    "Meriem Ouali",
    "Abdellatif Benabdellah",
    "Houda Amrani",
];

const CITIES: &[&str] = &[
    "Casablanca",
    "Rabat",
    "Marrakech",
    "Fes",
    "Tangier",
    "Agadir",
    "Meknes",
    "Oujda",
];

const COMPANIES: &[&str] = &[
    "Atlas Technologies",
    "Marrakech Innovations",
    "Rabat Solutions",
    "Casablanca Enterprises",
    "Fes Digital",
    "Tangier Industries",
    "Agadir Systems",
    "Meknes Corp",
];

const INDUSTRIES: &[&str] = &[
    "Technology",
    "Finance",
    "Marketing",
    "Healthcare",
    "Education",
    "Agriculture",
    "Tourism",
    "Manufacturing",
];

fn phone_pair(rng: &mut impl Rng) -> u32 {
    rng.gen_range(10..100)
}

pub fn generate_candidates(count: usize) -> Vec<CandidateProfile> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|index| {
            let name = NAMES[index % NAMES.len()];
            let years: u32 = rng.gen_range(1..=6);
            CandidateProfile {
                id: Uuid::new_v4(),
                full_name: name.to_string(),
                email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
                phone: format!(
                    "+212 6 {} {} {} {}",
                    phone_pair(&mut rng),
                    phone_pair(&mut rng),
                    phone_pair(&mut rng),
                    phone_pair(&mut rng)
                ),
                location: CITIES[rng.gen_range(0..CITIES.len())].to_string(),
                professional_summary: "Dedicated professional with experience in various \
                                       domains, seeking new opportunities to contribute \
                                       and grow."
                    .to_string(),
                skills: AVAILABLE_SKILLS
                    .iter()
                    .take(5)
                    .map(|name| SkillEntry {
                        name: name.to_string(),
                        rating: rng.gen_range(3..=5),
                        years_of_experience: rng.gen_range(1..=5),
                    })
                    .collect(),
                languages: vec![
                    LanguageEntry {
                        name: "Arabic".to_string(),
                        proficiency: Proficiency::Native,
                    },
                    LanguageEntry {
                        name: "French".to_string(),
                        proficiency: Proficiency::Advanced,
                    },
                    LanguageEntry {
                        name: "English".to_string(),
                        proficiency: Proficiency::Intermediate,
                    },
                ],
                education: vec![EducationEntry {
                    degree: "Bachelor's Degree".to_string(),
                    school: "Moroccan University".to_string(),
                    start_date: "2018".to_string(),
                    end_date: "2022".to_string(),
                    notes: "Graduated with honors".to_string(),
                }],
                work_experience: vec![WorkExperienceEntry {
                    job_title: "Professional".to_string(),
                    company: "Previous Company".to_string(),
                    start_date: "2022".to_string(),
                    end_date: "Present".to_string(),
                    responsibilities: "Various professional responsibilities and achievements"
                        .to_string(),
                    years: Some(years),
                }],
                certifications: vec![],
                projects: vec![],
            }
        })
        .collect()
}

pub fn generate_jobs(count: usize) -> Vec<JobPosting> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|index| {
            let industry = INDUSTRIES[index % INDUSTRIES.len()];
            let tag_start = rng.gen_range(0..10);
            let day: u32 = rng.gen_range(1..=28);
            JobPosting {
                id: Uuid::new_v4(),
                title: format!("Position {}", index + 1),
                company: COMPANIES[index % COMPANIES.len()].to_string(),
                industry: industry.to_string(),
                location: CITIES[rng.gen_range(0..CITIES.len())].to_string(),
                description: format!(
                    "Exciting opportunity to join our growing team and make a meaningful \
                     impact in the {} sector.",
                    industry.to_lowercase()
                ),
                requirements: vec![
                    "Relevant degree or experience".to_string(),
                    "Strong communication skills".to_string(),
                    "Team player with leadership potential".to_string(),
                    "Proficiency in required tools and technologies".to_string(),
                ],
                skill_tags: AVAILABLE_SKILLS
                    .iter()
                    .skip(tag_start)
                    .take(5)
                    .map(|t| t.to_string())
                    .collect(),
                // Day is within January's range.
                posted_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
                age_limit: None,
                custom_questions: vec![
                    "Why are you interested in this position?".to_string(),
                    "What unique value can you bring to our team?".to_string(),
                ],
                status: JobStatus::Open,
                applicant_count: 0,
                created_at: Utc::now(),
            }
        })
        .collect()
}
