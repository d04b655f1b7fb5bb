//! Experience-years derivation.
//!
//! The structured `years` field on a work-experience entry is authoritative.
//! Entries that predate the field fall back to the first "<digits> year(s)"
//! mention in their responsibilities text. An entry with neither counts as
//! zero, so a profile with no derivable years is excluded by any positive
//! experience threshold.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::CandidateProfile;

fn years_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)(\d+)\+?\s*years?").expect("static pattern compiles"))
}

/// First "<digits>+? year(s)" match in free text.
pub fn extract_years(text: &str) -> Option<u32> {
    years_pattern()
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Total experience across all work-experience entries, not only the first.
pub fn total_experience_years(profile: &CandidateProfile) -> u32 {
    profile
        .work_experience
        .iter()
        .map(|entry| {
            entry
                .years
                .or_else(|| extract_years(&entry.responsibilities))
                .unwrap_or(0)
        })
        .sum()
}
