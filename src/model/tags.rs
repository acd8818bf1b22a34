//! Typed views over free-text tag fields.
//!
//! Callers send labels as entered in forms, so parsing is case-insensitive and accepts both
//! the long form (`"Scheduled Caste (SC)"`) and the abbreviation (`"SC"`).

use serde::{Deserialize, Serialize};

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Social category used for equity weighting.
pub enum SocialCategory {
    ScheduledCaste,
    ScheduledTribe,
    OtherBackwardClasses,
    EconomicallyWeakerSection,
    PersonWithDisability,
    Minority,
    General,
    /// Blank or unrecognised label.
    Unknown,
}

impl SocialCategory {
    pub fn from_label(label: &str) -> Self {
        match normalize(label).as_str() {
            "scheduled caste (sc)" | "scheduled caste" | "sc" => Self::ScheduledCaste,
            "scheduled tribe (st)" | "scheduled tribe" | "st" => Self::ScheduledTribe,
            "other backward classes (obc)" | "other backward classes" | "obc" => {
                Self::OtherBackwardClasses
            }
            "economically weaker section (ews)" | "economically weaker section" | "ews" => {
                Self::EconomicallyWeakerSection
            }
            "person with disability (pwd)" | "person with disability" | "pwd" => {
                Self::PersonWithDisability
            }
            "minority" => Self::Minority,
            "general" => Self::General,
            _ => Self::Unknown,
        }
    }

    /// Equity boost in `[0, 1]`.
    pub fn equity_score(self) -> f32 {
        match self {
            Self::ScheduledCaste | Self::ScheduledTribe | Self::PersonWithDisability => 1.0,
            Self::OtherBackwardClasses | Self::EconomicallyWeakerSection => 0.8,
            Self::Minority => 0.6,
            Self::General | Self::Unknown => 0.0,
        }
    }

    pub fn is_sc_st(self) -> bool {
        matches!(self, Self::ScheduledCaste | Self::ScheduledTribe)
    }

    pub fn is_obc_ews(self) -> bool {
        matches!(
            self,
            Self::OtherBackwardClasses | Self::EconomicallyWeakerSection
        )
    }

    pub fn is_pwd(self) -> bool {
        matches!(self, Self::PersonWithDisability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Whether the student has taken part before.
pub enum ParticipationType {
    FirstTime,
    Returning,
    Unknown,
}

impl ParticipationType {
    pub fn from_label(label: &str) -> Self {
        match normalize(label).replace(['_', ' '], "-").as_str() {
            "first-time" | "firsttime" => Self::FirstTime,
            "returning" => Self::Returning,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Work arrangement of an internship.
pub enum InternshipType {
    Remote,
    OnSite,
    Hybrid,
    Other,
}

impl InternshipType {
    pub fn from_label(label: &str) -> Self {
        match normalize(label).replace(['_', ' '], "-").as_str() {
            "remote" => Self::Remote,
            "on-site" | "onsite" => Self::OnSite,
            "hybrid" => Self::Hybrid,
            _ => Self::Other,
        }
    }
}
