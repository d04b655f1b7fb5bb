/// What a free-text recruiter query is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryIntent {
    /// "best N candidates" / "top N candidates" — pick from the filtered pool.
    TopCandidates(usize),
    Filtering,
    InterviewScheduling,
    SalaryBenchmark,
    SkillsGap,
    General,
}

impl QueryIntent {
    /// Single-pass classification: lowercase the query, test trigger phrases
    /// in order, first match wins. The branches are mutually exclusive by
    /// construction.
    pub fn classify(query: &str) -> QueryIntent {
        let q = query.to_lowercase();

        if q.contains("best 5 candidates") || q.contains("top 5 candidates") {
            QueryIntent::TopCandidates(5)
        } else if q.contains("best 3 candidates") || q.contains("top 3 candidates") {
            QueryIntent::TopCandidates(3)
        } else if q.contains("filter") || q.contains("search") {
            QueryIntent::Filtering
        } else if q.contains("interview") || q.contains("schedule") {
            QueryIntent::InterviewScheduling
        } else if q.contains("salary") || q.contains("budget") {
            QueryIntent::SalaryBenchmark
        } else if q.contains("skill") && (q.contains("shortage") || q.contains("gap")) {
            QueryIntent::SkillsGap
        } else {
            QueryIntent::General
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_five_variants() {
        assert_eq!(
            QueryIntent::classify("give me the best 5 candidates"),
            QueryIntent::TopCandidates(5)
        );
        assert_eq!(
            QueryIntent::classify("Show TOP 5 CANDIDATES please"),
            QueryIntent::TopCandidates(5)
        );
    }

    #[test]
    fn test_top_three() {
        assert_eq!(
            QueryIntent::classify("who are the top 3 candidates?"),
            QueryIntent::TopCandidates(3)
        );
    }

    #[test]
    fn test_filtering_and_scheduling() {
        assert_eq!(QueryIntent::classify("how do I filter by skills"), QueryIntent::Filtering);
        assert_eq!(
            QueryIntent::classify("schedule an interview"),
            QueryIntent::InterviewScheduling
        );
    }

    #[test]
    fn test_salary_and_skills_gap() {
        assert_eq!(QueryIntent::classify("what salary should I offer"), QueryIntent::SalaryBenchmark);
        assert_eq!(QueryIntent::classify("is there a skill shortage"), QueryIntent::SkillsGap);
        assert_eq!(QueryIntent::classify("skills gap analysis"), QueryIntent::SkillsGap);
    }

    #[test]
    fn test_skill_alone_is_not_gap_intent() {
        // "skill" without shortage/gap falls through to the catch-all.
        assert_eq!(QueryIntent::classify("tell me about skills"), QueryIntent::General);
    }

    #[test]
    fn test_first_match_wins() {
        // Mentions both "top 5 candidates" and "interview": the earlier
        // branch takes it.
        assert_eq!(
            QueryIntent::classify("top 5 candidates to interview"),
            QueryIntent::TopCandidates(5)
        );
    }

    #[test]
    fn test_unrecognized_is_general() {
        assert_eq!(QueryIntent::classify("hello there"), QueryIntent::General);
    }
}
