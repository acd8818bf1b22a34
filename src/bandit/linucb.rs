//! LinUCB contextual bandit with one persisted arm per internship.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::arm::ArmState;
use super::config::BanditConfig;
use super::context::build_context_vector;
use super::error::{BanditError, BanditResult};
use crate::constants::{NEUTRAL_BANDIT_CONFIDENCE, NEUTRAL_BANDIT_SCORE, validate_context_dim};
use crate::model::{Internship, StudentProfile};
use crate::storage::ArmStore;

/// Output of [`LinUcbBandit::select`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BanditEstimate {
    /// `θᵀx + confidence`.
    pub score: f32,
    pub confidence: f32,
}

impl BanditEstimate {
    /// Returned when the arm cannot be evaluated.
    pub const NEUTRAL: Self = Self {
        score: NEUTRAL_BANDIT_SCORE,
        confidence: NEUTRAL_BANDIT_CONFIDENCE,
    };
}

/// LinUCB over an [`ArmStore`].
///
/// Selection never fails: unreadable arms start from identity and singular matrices yield
/// [`BanditEstimate::NEUTRAL`]. Updates to the same arm are serialized by a per-arm lock
/// held across the whole load-modify-save cycle.
pub struct LinUcbBandit<S> {
    store: S,
    config: BanditConfig,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: ArmStore> LinUcbBandit<S> {
    pub fn new(store: S, config: BanditConfig) -> Self {
        Self {
            store,
            config,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &BanditConfig {
        &self.config
    }

    /// Builds the context for the pair and scores it against the internship's arm.
    pub fn select(
        &self,
        student: &StudentProfile,
        internship: &Internship,
        similarity: f32,
        policy: f32,
    ) -> BanditEstimate {
        let context = self.context(student, internship, similarity, policy);
        self.select_context(&internship.id, &context)
    }

    /// Scores a prebuilt context against the arm for `internship_id`.
    pub fn select_context(&self, internship_id: &str, context: &[f64]) -> BanditEstimate {
        let arm = self.arm(internship_id);

        match arm.estimate(context, self.config.alpha) {
            Ok((score, confidence)) if score.is_finite() && confidence.is_finite() => {
                debug!(
                    internship_id,
                    score, confidence, "Bandit estimate computed"
                );
                BanditEstimate {
                    score: score as f32,
                    confidence: confidence as f32,
                }
            }
            Ok((score, confidence)) => {
                warn!(
                    internship_id,
                    score, confidence, "Non-finite bandit estimate; using neutral score"
                );
                BanditEstimate::NEUTRAL
            }
            Err(e) => {
                warn!(internship_id, error = %e, "Bandit estimate failed; using neutral score");
                BanditEstimate::NEUTRAL
            }
        }
    }

    /// Context vector for the pair at this bandit's dimension.
    pub fn context(
        &self,
        student: &StudentProfile,
        internship: &Internship,
        similarity: f32,
        policy: f32,
    ) -> Vec<f64> {
        build_context_vector(
            student,
            internship,
            similarity,
            policy,
            self.config.context_dim,
        )
    }

    /// Current state of an arm; identity if it was never updated or cannot be read.
    pub fn arm(&self, internship_id: &str) -> ArmState {
        let dim = self.config.context_dim;

        let loaded = self
            .store
            .load_arm(internship_id)
            .map_err(BanditError::from)
            .and_then(|record| record.map(|r| ArmState::from_record(r, dim)).transpose());

        match loaded {
            Ok(Some(arm)) => arm,
            Ok(None) => ArmState::identity(dim),
            Err(e) => {
                warn!(internship_id, error = %e, "Arm read failed; starting from identity");
                ArmState::identity(dim)
            }
        }
    }

    /// Applies one observed reward: `A += xxᵀ`, `b += r·x`, then persists the arm and
    /// appends the interaction.
    ///
    /// Unlike [`arm`](Self::arm), a read failure is returned rather than replaced by
    /// identity. [`BanditError::LogAppend`] means the arm was saved but the interaction
    /// was not logged.
    pub fn update(
        &self,
        student_id: &str,
        internship_id: &str,
        context: &[f64],
        reward: f64,
    ) -> BanditResult<()> {
        let dim = self.config.context_dim;
        validate_context_dim(context.len(), dim).map_err(|_| BanditError::DimensionMismatch {
            expected: dim,
            actual: context.len(),
        })?;
        if !reward.is_finite() {
            return Err(BanditError::InvalidReward { value: reward });
        }

        let lock = self.arm_lock(internship_id);
        let _guard = lock.lock();

        // A failed read drops this event; falling back to identity here would overwrite
        // the stored history on save.
        let mut arm = match self.store.load_arm(internship_id)? {
            Some(record) => ArmState::from_record(record, dim)?,
            None => ArmState::identity(dim),
        };
        arm.apply(context, reward)?;
        self.store.save_arm(&arm.to_record(internship_id))?;
        self.store
            .append_interaction(student_id, internship_id, context, reward)
            .map_err(|source| BanditError::LogAppend { source })?;

        debug!(student_id, internship_id, reward, "Arm updated");
        Ok(())
    }

    /// Entries are never evicted: arms are never deleted, so the table is bounded by the
    /// number of internships that ever received feedback.
    fn arm_lock(&self, internship_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .entry(internship_id.to_string())
            .or_default()
            .clone()
    }
}

impl<S> std::fmt::Debug for LinUcbBandit<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinUcbBandit")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
