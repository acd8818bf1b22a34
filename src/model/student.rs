use serde::{Deserialize, Serialize};

use super::tags::{ParticipationType, SocialCategory};

/// Demographic and preference record for one student.
///
/// Numeric-looking fields (`cgpa`, `family_income`, `stipend_expectation`,
/// `available_duration`) are free text; scoring parses them leniently and degrades to a
/// neutral score when they cannot be read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub state: String,
    pub district: String,
    pub city: String,
    pub pincode: String,
    pub current_education: String,
    pub university: String,
    pub course: String,
    pub graduation_year: String,
    /// CGPA as entered, e.g. `"8.5"`.
    pub cgpa: String,
    /// Social category label, e.g. `"Scheduled Caste (SC)"` or `"OBC"`.
    pub social_category: String,
    /// Single amount or `"min - max"` range, e.g. `"₹2,00,000 - ₹5,00,000"`.
    pub family_income: String,
    /// `"first-time"` or `"returning"`.
    pub participation_type: String,
    /// Free-text skills; order is irrelevant and duplicates are permitted.
    pub skills: Vec<String>,
    pub preferred_locations: Vec<String>,
    /// Single amount or `"min - max"` range.
    pub stipend_expectation: String,
    /// e.g. `"6 months"` or `"12 weeks"`.
    pub available_duration: String,
    pub additional_info: String,
}

impl StudentProfile {
    pub fn social_category(&self) -> SocialCategory {
        SocialCategory::from_label(&self.social_category)
    }

    pub fn participation(&self) -> ParticipationType {
        ParticipationType::from_label(&self.participation_type)
    }

    /// Parsed CGPA, or `None` if the field is blank or not a number.
    pub fn cgpa_value(&self) -> Option<f64> {
        self.cgpa
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}
