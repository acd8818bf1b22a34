use serde::{Deserialize, Serialize};

use super::internship::Internship;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Why an internship scored the way it did. Produced by one scoring call.
pub struct MatchExplanation {
    /// Semantic skill similarity in `[0, 1]`.
    pub similarity_score: f32,
    /// Weighted policy score in `[0, 1]`.
    pub policy_score: f32,
    /// LinUCB upper-confidence score (unbounded).
    pub bandit_score: f32,
    /// `0.4·similarity + 0.4·policy + 0.2·bandit`.
    pub final_score: f32,
    /// Required skills covered by at least one student skill.
    pub skill_matches: Vec<String>,
    pub location_match: String,
    pub equity_boost: String,
    pub participation_boost: String,
    /// `true` when the CGPA sub-score exceeds `0.5`.
    pub cgpa_eligible: bool,
    /// Exploration bonus reported by the bandit.
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A ranked internship with its explanation.
pub struct Recommendation {
    pub internship: Internship,
    pub match_score: f32,
    pub explanation: MatchExplanation,
    /// 1-based position after sorting the full candidate set.
    pub rank: usize,
}
