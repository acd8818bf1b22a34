//! Equity-aware policy scoring.
//!
//! [`PolicyScorer`] evaluates seven independent factors (location, social category,
//! participation history, family income, CGPA eligibility, stipend, duration) and combines
//! them with fixed weights into one score plus a [`PolicyBreakdown`] of rationales.
//!
//! Free-text numeric fields go through the lenient parsers in [`parse`]; their failures are
//! reported as [`ParseError`] internally and always degrade to the neutral sub-score.

pub mod error;
pub mod location;
pub mod parse;
pub mod policy;
pub mod types;


pub use error::ParseError;
pub use location::LocationMatch;
pub use policy::{PolicyScorer, PolicyWeights};
pub use types::{FactorScore, PolicyBreakdown};
