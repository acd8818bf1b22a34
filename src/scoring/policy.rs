//! Seven-factor policy scorer.
//!
//! Every rule is first-match-wins and total: malformed or missing inputs map to
//! [`NEUTRAL_POLICY_SCORE`] with a rationale instead of an error.

use tracing::debug;

use super::location::LocationMatch;
use super::parse::{format_amount, parse_amount, parse_duration_weeks};
use super::types::{FactorScore, PolicyBreakdown};
use crate::constants::{
    CGPA_WEIGHT, DURATION_WEIGHT, FAMILY_INCOME_WEIGHT, LOCATION_WEIGHT, NEUTRAL_POLICY_SCORE,
    PARTICIPATION_WEIGHT, SOCIAL_CATEGORY_WEIGHT, STIPEND_WEIGHT,
};
use crate::model::{Internship, InternshipType, ParticipationType, StudentProfile};

/// Fixed weights for the seven policy factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyWeights {
    pub location: f32,
    pub social_category: f32,
    pub participation: f32,
    pub family_income: f32,
    pub cgpa_eligibility: f32,
    pub stipend: f32,
    pub duration: f32,
}

impl Default for PolicyWeights {
    fn default() -> Self {
        Self {
            location: LOCATION_WEIGHT,
            social_category: SOCIAL_CATEGORY_WEIGHT,
            participation: PARTICIPATION_WEIGHT,
            family_income: FAMILY_INCOME_WEIGHT,
            cgpa_eligibility: CGPA_WEIGHT,
            stipend: STIPEND_WEIGHT,
            duration: DURATION_WEIGHT,
        }
    }
}

impl PolicyWeights {
    pub fn sum(&self) -> f32 {
        self.location
            + self.social_category
            + self.participation
            + self.family_income
            + self.cgpa_eligibility
            + self.stipend
            + self.duration
    }
}

/// Stateless equity-aware scorer.
#[derive(Debug, Clone, Default)]
pub struct PolicyScorer {
    weights: PolicyWeights,
}

impl PolicyScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weights(&self) -> &PolicyWeights {
        &self.weights
    }

    /// Scores one (student, internship) pair. Total is `Σ(sub-score × weight)`.
    pub fn score(&self, student: &StudentProfile, internship: &Internship) -> PolicyBreakdown {
        let w = &self.weights;

        let (s, why) = location_score(student, internship);
        let location = FactorScore::new(s, w.location, why);
        let (s, why) = social_category_score(student);
        let social_category = FactorScore::new(s, w.social_category, why);
        let (s, why) = participation_score(student);
        let participation = FactorScore::new(s, w.participation, why);
        let (s, why) = income_score(student, internship);
        let family_income = FactorScore::new(s, w.family_income, why);
        let (s, why) = cgpa_score(student, internship);
        let cgpa_eligibility = FactorScore::new(s, w.cgpa_eligibility, why);
        let (s, why) = stipend_score(student, internship);
        let stipend = FactorScore::new(s, w.stipend, why);
        let (s, why) = duration_score(student, internship);
        let duration = FactorScore::new(s, w.duration, why);

        let mut breakdown = PolicyBreakdown {
            location,
            social_category,
            participation,
            family_income,
            cgpa_eligibility,
            stipend,
            duration,
            total: 0.0,
        };
        breakdown.total = breakdown.factors().iter().map(|(_, f)| f.weighted()).sum();

        debug!(
            student_id = %student.id,
            internship_id = %internship.id,
            policy_score = breakdown.total,
            "Policy score computed"
        );

        breakdown
    }
}

fn location_score(student: &StudentProfile, internship: &Internship) -> (f32, String) {
    match LocationMatch::between(student, internship) {
        LocationMatch::CityAndDistrict => {
            return (
                1.0,
                format!(
                    "Exact location match: {}, {}",
                    internship.city, internship.district
                ),
            );
        }
        LocationMatch::District => {
            return (0.8, format!("Same district: {}", internship.district));
        }
        LocationMatch::State => return (0.6, format!("Same state: {}", internship.state)),
        LocationMatch::None => {}
    }

    let location = internship.location.to_lowercase();
    let preferred = student
        .preferred_locations
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .any(|p| location.contains(&p.to_lowercase()));

    if preferred {
        (
            0.4,
            format!("Matches preferred location: {}", internship.location),
        )
    } else if internship.kind() == InternshipType::Remote {
        (0.3, "Remote work opportunity".to_string())
    } else {
        (0.1, "Different location".to_string())
    }
}

fn social_category_score(student: &StudentProfile) -> (f32, String) {
    let score = student.social_category().equity_score();
    (
        score,
        format!("Equity boost for {}", student.social_category),
    )
}

fn participation_score(student: &StudentProfile) -> (f32, String) {
    match student.participation() {
        ParticipationType::FirstTime => (0.8, "First-time participant support".to_string()),
        ParticipationType::Returning => (0.6, "Returning participant".to_string()),
        ParticipationType::Unknown => (
            NEUTRAL_POLICY_SCORE,
            "Unknown participation type".to_string(),
        ),
    }
}

/// Needs a stated stipend on the internship side as well as the student's income band.
fn income_score(student: &StudentProfile, internship: &Internship) -> (f32, String) {
    if student.family_income.trim().is_empty() || internship.effective_stipend().is_none() {
        return (NEUTRAL_POLICY_SCORE, "Income data not available".to_string());
    }

    let income = match parse_amount(&student.family_income) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, student_id = %student.id, "Unparseable family income");
            return (NEUTRAL_POLICY_SCORE, "Could not parse income data".to_string());
        }
    };

    if income < 200_000.0 {
        (1.0, "High priority: Low family income".to_string())
    } else if income < 500_000.0 {
        (0.8, "Medium priority: Moderate family income".to_string())
    } else if income < 1_000_000.0 {
        (0.6, "Standard priority: Middle income".to_string())
    } else {
        (0.4, "Lower priority: Higher family income".to_string())
    }
}

fn cgpa_score(student: &StudentProfile, internship: &Internship) -> (f32, String) {
    let Some(required) = internship.effective_cgpa_requirement() else {
        return (1.0, "No CGPA requirement specified".to_string());
    };
    let Some(cgpa) = student.cgpa_value() else {
        return (NEUTRAL_POLICY_SCORE, "Could not parse CGPA data".to_string());
    };

    if cgpa >= required + 0.5 {
        (1.0, format!("Exceeds CGPA requirement ({cgpa} >= {required})"))
    } else if cgpa >= required {
        (0.9, format!("Meets CGPA requirement ({cgpa} >= {required})"))
    } else if cgpa >= required - 0.5 {
        (0.6, format!("Close to CGPA requirement ({cgpa} vs {required})"))
    } else {
        (0.2, format!("Below CGPA requirement ({cgpa} < {required})"))
    }
}

fn stipend_score(student: &StudentProfile, internship: &Internship) -> (f32, String) {
    let Some(stipend) = internship.effective_stipend() else {
        return (NEUTRAL_POLICY_SCORE, "Stipend data not available".to_string());
    };
    if student.stipend_expectation.trim().is_empty() {
        return (NEUTRAL_POLICY_SCORE, "Stipend data not available".to_string());
    }

    let expected = match parse_amount(&student.stipend_expectation) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, student_id = %student.id, "Unparseable stipend expectation");
            return (NEUTRAL_POLICY_SCORE, "Could not parse stipend data".to_string());
        }
    };

    let offered = format_amount(stipend);
    let wanted = format_amount(expected);

    if stipend >= expected {
        (
            1.0,
            format!("Stipend meets expectation (₹{offered} >= ₹{wanted})"),
        )
    } else if stipend >= expected * 0.8 {
        (
            0.8,
            format!("Stipend close to expectation (₹{offered} vs ₹{wanted})"),
        )
    } else if stipend >= expected * 0.6 {
        (
            0.6,
            format!("Stipend below expectation (₹{offered} vs ₹{wanted})"),
        )
    } else {
        (
            0.3,
            format!("Stipend significantly below expectation (₹{offered} vs ₹{wanted})"),
        )
    }
}

fn duration_score(student: &StudentProfile, internship: &Internship) -> (f32, String) {
    let required = internship.duration_weeks;
    if required == 0 || student.available_duration.trim().is_empty() {
        return (NEUTRAL_POLICY_SCORE, "Duration data not available".to_string());
    }

    let available = match parse_duration_weeks(&student.available_duration) {
        Ok(weeks) => weeks,
        Err(e) => {
            debug!(error = %e, student_id = %student.id, "Unparseable availability");
            return (NEUTRAL_POLICY_SCORE, "Could not parse duration format".to_string());
        }
    };

    let required_f = f64::from(required);
    if available >= required_f {
        (
            1.0,
            format!("Available duration sufficient ({available:.0} weeks >= {required} weeks)"),
        )
    } else if available >= required_f * 0.8 {
        (
            0.8,
            format!(
                "Available duration close to requirement ({available:.0} weeks vs {required} weeks)"
            ),
        )
    } else {
        (
            0.4,
            format!("Available duration below requirement ({available:.0} weeks < {required} weeks)"),
        )
    }
}
