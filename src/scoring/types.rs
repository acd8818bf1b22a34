use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One policy factor: sub-score, its fixed weight and a human-readable rationale.
pub struct FactorScore {
    /// Sub-score in `[0, 1]`.
    pub score: f32,
    pub weight: f32,
    pub explanation: String,
}

impl FactorScore {
    pub fn new(score: f32, weight: f32, explanation: impl Into<String>) -> Self {
        Self {
            score,
            weight,
            explanation: explanation.into(),
        }
    }

    /// `score × weight`.
    pub fn weighted(&self) -> f32 {
        self.score * self.weight
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Full output of [`PolicyScorer::score`](super::PolicyScorer::score).
pub struct PolicyBreakdown {
    pub location: FactorScore,
    pub social_category: FactorScore,
    pub participation: FactorScore,
    pub family_income: FactorScore,
    pub cgpa_eligibility: FactorScore,
    pub stipend: FactorScore,
    pub duration: FactorScore,
    /// Σ(sub-score × weight).
    pub total: f32,
}

impl PolicyBreakdown {
    /// Factors in fixed order, keyed by name.
    pub fn factors(&self) -> [(&'static str, &FactorScore); 7] {
        [
            ("location", &self.location),
            ("social_category", &self.social_category),
            ("participation_type", &self.participation),
            ("family_income", &self.family_income),
            ("cgpa_eligibility", &self.cgpa_eligibility),
            ("stipend_expectation", &self.stipend),
            ("available_duration", &self.duration),
        ]
    }

    /// The CGPA factor counts as eligible above 0.5.
    pub fn is_cgpa_eligible(&self) -> bool {
        self.cgpa_eligibility.score > 0.5
    }
}
