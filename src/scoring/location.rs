use crate::model::{Internship, StudentProfile};

/// Administrative location overlap between a student and an internship.
///
/// Blank fields never match, so two records missing a district are not "same district".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMatch {
    /// Same city and same district.
    CityAndDistrict,
    District,
    State,
    None,
}

impl LocationMatch {
    pub fn between(student: &StudentProfile, internship: &Internship) -> Self {
        let district = same_place(&student.district, &internship.district);

        if district && same_place(&student.city, &internship.city) {
            Self::CityAndDistrict
        } else if district {
            Self::District
        } else if same_place(&student.state, &internship.state) {
            Self::State
        } else {
            Self::None
        }
    }

    /// Scalar used in the bandit context: 1.0 / 0.8 / 0.6 / 0.0.
    pub fn value(self) -> f64 {
        match self {
            Self::CityAndDistrict => 1.0,
            Self::District => 0.8,
            Self::State => 0.6,
            Self::None => 0.0,
        }
    }
}

fn same_place(a: &str, b: &str) -> bool {
    let a = a.trim();
    !a.is_empty() && a.eq_ignore_ascii_case(b.trim())
}
