//! Cross-cutting, shared constants.
//!
//! # Dimension Invariants
//!
//! [`CONTEXT_DIM`] sizes every persisted bandit arm (`A` is `d×d`, `b` has `d` entries).
//! Changing it invalidates stored arms, so stores reject records of a different dimension
//! and callers should run [`validate_context_dim`] at module boundaries.

/// Native output dimension of the sentence encoder (all-MiniLM-L6-v2).
pub const EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the sentence encoder.
pub const EMBEDDING_MAX_SEQ_LEN: usize = 256;

/// Fixed bandit context dimensionality.
pub const CONTEXT_DIM: usize = 50;

/// LinUCB exploration constant.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Neutral `(score, confidence)` returned when an arm's matrix cannot be inverted.
pub const NEUTRAL_BANDIT_SCORE: f32 = 0.5;
pub const NEUTRAL_BANDIT_CONFIDENCE: f32 = 0.1;

/// Neutral sub-score used whenever policy inputs are missing or unparseable.
pub const NEUTRAL_POLICY_SCORE: f32 = 0.5;

/// Final blend: `0.4·similarity + 0.4·policy + 0.2·bandit`.
pub const SIMILARITY_WEIGHT: f32 = 0.4;
pub const POLICY_WEIGHT: f32 = 0.4;
pub const BANDIT_WEIGHT: f32 = 0.2;

/// Policy factor weights (sum to 1.0).
pub const LOCATION_WEIGHT: f32 = 0.25;
pub const SOCIAL_CATEGORY_WEIGHT: f32 = 0.20;
pub const PARTICIPATION_WEIGHT: f32 = 0.15;
pub const FAMILY_INCOME_WEIGHT: f32 = 0.10;
pub const CGPA_WEIGHT: f32 = 0.15;
pub const STIPEND_WEIGHT: f32 = 0.10;
pub const DURATION_WEIGHT: f32 = 0.05;

/// Weeks per month used when converting "N months" availability.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Default number of recommendations returned.
pub const DEFAULT_TOP_K: usize = 10;

/// Error returned when a runtime context dimension disagrees with the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "context dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime context dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use matchmaker::constants::{validate_context_dim, CONTEXT_DIM};
///
/// validate_context_dim(50, CONTEXT_DIM).unwrap();
/// assert!(validate_context_dim(49, CONTEXT_DIM).is_err());
/// ```
pub fn validate_context_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 || actual == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
