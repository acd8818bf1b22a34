//! Bandit context features.
//!
//! Feature order is part of the persisted contract: stored arms are dimensioned to match it.
//!
//! | idx | feature |
//! |-----|---------|
//! | 0 | student CGPA (0.0 if unparseable) |
//! | 1 | student skill count |
//! | 2-5 | first-time, SC/ST, OBC/EWS, PwD flags |
//! | 6 | internship CGPA requirement (0.0 if none) |
//! | 7 | internship skill count |
//! | 8 | stipend amount (0.0 if none) |
//! | 9 | duration in weeks |
//! | 10-11 | remote, hybrid flags |
//! | 12 | similarity score |
//! | 13 | policy score |
//! | 14 | location match (1.0 / 0.8 / 0.6 / 0.0) |
//!
//! The rest is zero padding up to the context dimension.

use crate::model::{Internship, InternshipType, ParticipationType, StudentProfile};
use crate::scoring::LocationMatch;

/// Number of populated features before padding.
pub const FEATURE_COUNT: usize = 15;

#[inline]
fn flag(on: bool) -> f64 {
    if on { 1.0 } else { 0.0 }
}

/// Builds the context vector, right-padded with zeros or truncated to exactly `dim`.
pub fn build_context_vector(
    student: &StudentProfile,
    internship: &Internship,
    similarity: f32,
    policy: f32,
    dim: usize,
) -> Vec<f64> {
    let category = student.social_category();
    let kind = internship.kind();

    let mut context = Vec::with_capacity(dim.max(FEATURE_COUNT));
    context.extend([
        student.cgpa_value().unwrap_or(0.0),
        student.skills.len() as f64,
        flag(student.participation() == ParticipationType::FirstTime),
        flag(category.is_sc_st()),
        flag(category.is_obc_ews()),
        flag(category.is_pwd()),
        internship
            .cgpa_requirement
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        internship.skills_required.len() as f64,
        internship
            .stipend_amount
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        f64::from(internship.duration_weeks),
        flag(kind == InternshipType::Remote),
        flag(kind == InternshipType::Hybrid),
        f64::from(similarity),
        f64::from(policy),
        LocationMatch::between(student, internship).value(),
    ]);

    context.resize(dim, 0.0);
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> StudentProfile {
        StudentProfile {
            state: "California".to_string(),
            district: "Santa Clara".to_string(),
            city: "San Jose".to_string(),
            cgpa: "8.5".to_string(),
            social_category: "OBC".to_string(),
            participation_type: "first-time".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string(), "Go".to_string()],
            ..Default::default()
        }
    }

    fn internship() -> Internship {
        Internship {
            state: "California".to_string(),
            district: "Santa Clara".to_string(),
            city: "Palo Alto".to_string(),
            skills_required: vec!["Python".to_string()],
            cgpa_requirement: Some(7.5),
            stipend_amount: Some(20_000.0),
            duration_weeks: 12,
            internship_type: "hybrid".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_feature_order_and_padding() {
        let x = build_context_vector(&student(), &internship(), 0.75, 0.5, 50);

        assert_eq!(x.len(), 50);
        assert_eq!(
            &x[..FEATURE_COUNT],
            &[
                8.5, 3.0, 1.0, 0.0, 1.0, 0.0, 7.5, 1.0, 20_000.0, 12.0, 0.0, 1.0, 0.75, 0.5, 0.8
            ]
        );
        assert!(x[FEATURE_COUNT..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_missing_values_are_zero() {
        let s = StudentProfile {
            cgpa: "n/a".to_string(),
            ..Default::default()
        };
        let i = Internship::default();

        let x = build_context_vector(&s, &i, 0.0, 0.0, 50);
        assert!(x.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_truncates_to_dimension() {
        let x = build_context_vector(&student(), &internship(), 0.75, 0.5, 4);
        assert_eq!(x, vec![8.5, 3.0, 1.0, 0.0]);
    }
}
