use serde::{Deserialize, Serialize};

use super::tags::InternshipType;

fn default_active() -> bool {
    true
}

/// One internship opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Internship {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Free text used for semantic matching together with `skills_required`.
    pub description: String,
    pub skills_required: Vec<String>,
    pub cgpa_requirement: Option<f64>,
    /// Free-text location, matched against the student's preferred locations.
    pub location: String,
    pub state: String,
    pub district: String,
    pub city: String,
    /// `"remote"`, `"on-site"` or `"hybrid"`.
    pub internship_type: String,
    pub duration_weeks: u32,
    pub stipend_amount: Option<f64>,
    pub stipend_currency: String,
    pub application_deadline: String,
    pub start_date: String,
    pub end_date: String,
    pub available_positions: u32,
    pub filled_positions: u32,
    pub benefits: Vec<String>,
    pub application_process: String,
    /// Inactive internships never enter scoring.
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub tags: Vec<String>,
    pub department: String,
    pub category: String,
    pub company_size: String,
}

impl Default for Internship {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            company: String::new(),
            description: String::new(),
            skills_required: Vec::new(),
            cgpa_requirement: None,
            location: String::new(),
            state: String::new(),
            district: String::new(),
            city: String::new(),
            internship_type: String::new(),
            duration_weeks: 0,
            stipend_amount: None,
            stipend_currency: String::new(),
            application_deadline: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            available_positions: 0,
            filled_positions: 0,
            benefits: Vec::new(),
            application_process: String::new(),
            is_active: default_active(),
            tags: Vec::new(),
            department: String::new(),
            category: String::new(),
            company_size: String::new(),
        }
    }
}

impl Internship {
    pub fn kind(&self) -> InternshipType {
        InternshipType::from_label(&self.internship_type)
    }

    /// Positions still open (never negative).
    pub fn remaining_positions(&self) -> u32 {
        self.available_positions
            .saturating_sub(self.filled_positions)
    }

    /// CGPA requirement, treating `0.0` and non-finite values as "no requirement".
    pub fn effective_cgpa_requirement(&self) -> Option<f64> {
        self.cgpa_requirement.filter(|v| v.is_finite() && *v != 0.0)
    }

    /// Stipend amount, treating `0.0` and non-finite values as "not stated".
    pub fn effective_stipend(&self) -> Option<f64> {
        self.stipend_amount.filter(|v| v.is_finite() && *v != 0.0)
    }
}
