//! Domain records supplied by callers and the records derived from scoring.
//!
//! Profiles and internships are immutable for the duration of a scoring call and are
//! supplied fresh on every request; the engine never owns their lifecycle.

mod internship;
mod recommendation;
mod student;
mod tags;

pub use internship::Internship;
pub use recommendation::{MatchExplanation, Recommendation};
pub use student::StudentProfile;
pub use tags::{InternshipType, ParticipationType, SocialCategory};
