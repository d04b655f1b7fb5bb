//! Hand-authored catalog entries.
//!
//! Three fully fleshed-out candidate profiles and five postings across
//! distinct industries, so every filter dimension has something to bite on
//! out of the box.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{
    AgeRange, CandidateProfile, CertificationEntry, EducationEntry, JobPosting, JobStatus,
    LanguageEntry, Proficiency, ProjectEntry, SkillEntry, WorkExperienceEntry,
};

fn skill(name: &str, rating: u8, years: u32) -> SkillEntry {
    SkillEntry {
        name: name.to_string(),
        rating,
        years_of_experience: years,
    }
}

fn language(name: &str, proficiency: Proficiency) -> LanguageEntry {
    LanguageEntry {
        name: name.to_string(),
        proficiency,
    }
}

pub fn seed_candidates() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile {
            id: Uuid::new_v4(),
            full_name: "Youssef El Mansouri".to_string(),
            email: "youssef.elmansouri@email.com".to_string(),
            phone: "+212 6 12 34 56 78".to_string(),
            location: "Casablanca".to_string(),
            professional_summary: "Experienced web developer with 5+ years in full-stack \
                                   development. Passionate about creating scalable web \
                                   applications using modern technologies."
                .to_string(),
            skills: vec![
                skill("JavaScript", 5, 5),
                skill("React", 5, 4),
                skill("Node.js", 4, 3),
                skill("Python", 4, 2),
            ],
            languages: vec![
                language("Arabic", Proficiency::Native),
                language("French", Proficiency::Advanced),
                language("English", Proficiency::Advanced),
            ],
            education: vec![EducationEntry {
                degree: "Master in Computer Science".to_string(),
                school: "Université Hassan II".to_string(),
                start_date: "2018".to_string(),
                end_date: "2020".to_string(),
                notes: "Specialized in Software Engineering".to_string(),
            }],
            work_experience: vec![WorkExperienceEntry {
                job_title: "Senior Web Developer".to_string(),
                company: "TechMorocco Solutions".to_string(),
                start_date: "2020".to_string(),
                end_date: "Present".to_string(),
                responsibilities: "Lead development team, architect scalable solutions, \
                                   mentor junior developers"
                    .to_string(),
                years: Some(5),
            }],
            certifications: vec![CertificationEntry {
                title: "AWS Certified Developer".to_string(),
                issuing_org: "Amazon".to_string(),
                date: "2023".to_string(),
            }],
            projects: vec![ProjectEntry {
                name: "E-commerce Platform".to_string(),
                link: Some("https://example.com".to_string()),
                description: "Full-stack e-commerce solution".to_string(),
            }],
        },
        CandidateProfile {
            id: Uuid::new_v4(),
            full_name: "Kenza Bouzidi".to_string(),
            email: "kenza.bouzidi@email.com".to_string(),
            phone: "+212 6 87 65 43 21".to_string(),
            location: "Rabat".to_string(),
            professional_summary: "Creative digital marketing specialist with expertise in \
                                   social media strategy and content creation. Proven track \
                                   record of increasing brand engagement."
                .to_string(),
            skills: vec![
                skill("Digital Marketing", 5, 4),
                skill("Social Media", 5, 4),
                skill("SEO", 4, 3),
                skill("Content Writing", 4, 3),
            ],
            languages: vec![
                language("Arabic", Proficiency::Native),
                language("French", Proficiency::Native),
                language("English", Proficiency::Advanced),
            ],
            education: vec![EducationEntry {
                degree: "Bachelor in Marketing".to_string(),
                school: "Université Mohammed V".to_string(),
                start_date: "2017".to_string(),
                end_date: "2020".to_string(),
                notes: "Focus on Digital Marketing".to_string(),
            }],
            work_experience: vec![WorkExperienceEntry {
                job_title: "Digital Marketing Manager".to_string(),
                company: "Maroc Digital Agency".to_string(),
                start_date: "2021".to_string(),
                end_date: "Present".to_string(),
                responsibilities: "Develop marketing strategies, manage social media \
                                   campaigns, analyze performance metrics"
                    .to_string(),
                years: Some(4),
            }],
            certifications: vec![CertificationEntry {
                title: "Google Analytics Certified".to_string(),
                issuing_org: "Google".to_string(),
                date: "2023".to_string(),
            }],
            projects: vec![ProjectEntry {
                name: "Brand Campaign 2023".to_string(),
                link: Some("https://example.com".to_string()),
                description: "Successful social media campaign that increased engagement \
                              by 150%"
                    .to_string(),
            }],
        },
        CandidateProfile {
            id: Uuid::new_v4(),
            full_name: "Ahmed Tazi".to_string(),
            email: "ahmed.tazi@email.com".to_string(),
            phone: "+212 6 55 44 33 22".to_string(),
            location: "Marrakech".to_string(),
            professional_summary: "Financial analyst with strong analytical skills and 6+ \
                                   years of experience in investment banking and corporate \
                                   finance."
                .to_string(),
            skills: vec![
                skill("Financial Analysis", 5, 6),
                skill("Excel", 5, 6),
                skill("Data Analysis", 4, 4),
                skill("Presentation", 4, 5),
            ],
            languages: vec![
                language("Arabic", Proficiency::Native),
                language("French", Proficiency::Advanced),
                language("English", Proficiency::Advanced),
            ],
            education: vec![EducationEntry {
                degree: "Master in Finance".to_string(),
                school: "Al Akhawayn University".to_string(),
                start_date: "2016".to_string(),
                end_date: "2018".to_string(),
                notes: "Summa Cum Laude".to_string(),
            }],
            work_experience: vec![WorkExperienceEntry {
                job_title: "Senior Financial Analyst".to_string(),
                company: "Casablanca Finance Group".to_string(),
                start_date: "2018".to_string(),
                end_date: "Present".to_string(),
                responsibilities: "Financial modeling, risk assessment, investment \
                                   analysis, client presentations"
                    .to_string(),
                years: Some(6),
            }],
            certifications: vec![CertificationEntry {
                title: "CFA Level II".to_string(),
                issuing_org: "CFA Institute".to_string(),
                date: "2022".to_string(),
            }],
            projects: vec![],
        },
    ]
}

struct SeedJob {
    title: &'static str,
    company: &'static str,
    industry: &'static str,
    location: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
    skill_tags: &'static [&'static str],
    posted: (i32, u32, u32),
    age_limit: Option<AgeRange>,
    custom_questions: &'static [&'static str],
}

const SEED_JOBS: &[SeedJob] = &[
    SeedJob {
        title: "Senior Full Stack Developer",
        company: "TechMorocco Solutions",
        industry: "Technology",
        location: "Casablanca",
        description: "We are looking for an experienced full-stack developer to join our \
                      growing team. You will work on cutting-edge web applications using \
                      modern technologies.",
        requirements: &[
            "5+ years of experience in web development",
            "Strong knowledge of JavaScript, React, and Node.js",
            "Experience with databases and cloud platforms",
            "Excellent problem-solving skills",
        ],
        skill_tags: &["JavaScript", "React", "Node.js", "MongoDB", "AWS"],
        posted: (2024, 1, 15),
        age_limit: None,
        custom_questions: &[
            "Describe your experience with React and modern JavaScript frameworks.",
            "How do you approach debugging complex technical issues?",
        ],
    },
    SeedJob {
        title: "Digital Marketing Manager",
        company: "Maroc Digital Agency",
        industry: "Marketing",
        location: "Rabat",
        description: "Join our dynamic marketing team to lead digital campaigns and drive \
                      brand growth across multiple channels.",
        requirements: &[
            "3+ years of digital marketing experience",
            "Expertise in social media marketing and SEO",
            "Strong analytical and communication skills",
            "Experience with marketing automation tools",
        ],
        skill_tags: &[
            "Digital Marketing",
            "SEO",
            "Social Media",
            "Google Analytics",
            "Content Writing",
        ],
        posted: (2024, 1, 10),
        age_limit: Some(AgeRange { min: 25, max: 40 }),
        custom_questions: &[
            "What marketing campaigns are you most proud of?",
            "How do you measure the success of a digital marketing campaign?",
        ],
    },
    SeedJob {
        title: "Financial Analyst",
        company: "Casablanca Finance Group",
        industry: "Finance",
        location: "Casablanca",
        description: "We seek a detail-oriented financial analyst to support our investment \
                      decisions and provide insights to senior management.",
        requirements: &[
            "Bachelor's degree in Finance or related field",
            "Strong analytical and Excel skills",
            "Knowledge of financial modeling",
            "CFA certification preferred",
        ],
        skill_tags: &[
            "Financial Analysis",
            "Excel",
            "Financial Modeling",
            "Data Analysis",
            "Presentation",
        ],
        posted: (2024, 1, 12),
        age_limit: None,
        custom_questions: &[
            "Describe your experience with financial modeling.",
            "How do you stay updated with market trends?",
        ],
    },
    SeedJob {
        title: "UX/UI Designer",
        company: "Creative Studio Maroc",
        industry: "Design",
        location: "Casablanca",
        description: "Looking for a talented designer to create exceptional user \
                      experiences for web and mobile applications.",
        requirements: &[
            "3+ years of UX/UI design experience",
            "Proficiency in Figma, Adobe Creative Suite",
            "Strong portfolio demonstrating design thinking",
            "Understanding of front-end technologies",
        ],
        skill_tags: &["UI/UX", "Figma", "Photoshop", "Illustrator", "User Research"],
        posted: (2024, 1, 8),
        age_limit: None,
        custom_questions: &[
            "Walk us through your design process.",
            "How do you handle feedback and iterate on designs?",
        ],
    },
    SeedJob {
        title: "Agricultural Engineer",
        company: "AgriTech Morocco",
        industry: "Agriculture",
        location: "Meknes",
        description: "Join our mission to modernize Moroccan agriculture through innovative \
                      farming techniques and sustainable practices.",
        requirements: &[
            "Degree in Agricultural Engineering",
            "Knowledge of modern farming techniques",
            "Experience with agricultural technology",
            "Strong communication skills in Arabic and French",
        ],
        skill_tags: &[
            "Agriculture",
            "Agronomy",
            "Project Management",
            "Sustainability",
            "Research",
        ],
        posted: (2024, 1, 5),
        age_limit: None,
        custom_questions: &[
            "What innovations in agriculture excite you most?",
            "How would you help farmers adopt new technologies?",
        ],
    },
];

pub fn seed_jobs() -> Vec<JobPosting> {
    SEED_JOBS
        .iter()
        .map(|seed| {
            let (year, month, day) = seed.posted;
            JobPosting {
                id: Uuid::new_v4(),
                title: seed.title.to_string(),
                company: seed.company.to_string(),
                industry: seed.industry.to_string(),
                location: seed.location.to_string(),
                description: seed.description.to_string(),
                requirements: seed.requirements.iter().map(|r| r.to_string()).collect(),
                skill_tags: seed.skill_tags.iter().map(|t| t.to_string()).collect(),
                // Seed dates are valid by construction.
                posted_date: NaiveDate::from_ymd_opt(year, month, day)
                    .unwrap_or_default(),
                age_limit: seed.age_limit,
                custom_questions: seed
                    .custom_questions
                    .iter()
                    .map(|q| q.to_string())
                    .collect(),
                status: JobStatus::Open,
                applicant_count: 0,
                created_at: Utc::now(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_candidates_cover_distinct_cities() {
        let candidates = seed_candidates();
        assert_eq!(candidates.len(), 3);
        let cities: Vec<&str> = candidates.iter().map(|c| c.location.as_str()).collect();
        assert!(cities.contains(&"Casablanca"));
        assert!(cities.contains(&"Rabat"));
        assert!(cities.contains(&"Marrakech"));
    }

    #[test]
    fn test_seed_jobs_all_open_with_unique_ids() {
        let jobs = seed_jobs();
        assert_eq!(jobs.len(), 5);
        assert!(jobs.iter().all(|j| j.status == JobStatus::Open));
        let mut ids: Vec<_> = jobs.iter().map(|j| j.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_only_marketing_posting_carries_age_limit() {
        let jobs = seed_jobs();
        let limited: Vec<_> = jobs.iter().filter(|j| j.age_limit.is_some()).collect();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].industry, "Marketing");
        assert_eq!(limited[0].age_limit, Some(AgeRange { min: 25, max: 40 }));
    }

    #[test]
    fn test_seed_profiles_have_structured_experience_years() {
        for candidate in seed_candidates() {
            for entry in &candidate.work_experience {
                assert!(entry.years.is_some(), "{} missing years", candidate.full_name);
            }
        }
    }
}
