//! Orchestrator combining similarity, policy and bandit scores into ranked recommendations.
//!
//! Per candidate: similarity → policy → bandit (context built from the first two), then
//! `final = 0.4·similarity + 0.4·policy + 0.2·bandit`. Feedback flows back into the
//! internship's bandit arm.
//!
//! Components are injected; [`Matchmaker::from_config`] wires the production ones.

pub mod error;
mod health;
mod skills;

#[cfg(test)]
mod tests;

pub use error::{MatchError, MatchResult};
pub use health::HealthReport;
pub use skills::find_skill_matches;

use std::collections::HashSet;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::bandit::{BanditConfig, BanditError, LinUcbBandit};
use crate::config::Config;
use crate::constants::{BANDIT_WEIGHT, DEFAULT_TOP_K, POLICY_WEIGHT, SIMILARITY_WEIGHT};
use crate::embedding::{SbertConfig, SbertEmbedder, SimilarityService, TextEncoder};
use crate::model::{Internship, MatchExplanation, Recommendation, StudentProfile};
use crate::scoring::PolicyScorer;
use crate::storage::{ArmStore, FileArmStore};

const PROBE_STUDENT_SKILLS: [&str; 2] = ["Python", "Machine Learning"];
const PROBE_INTERNSHIP_SKILLS: [&str; 1] = ["Python"];
const PROBE_DESCRIPTION: &str = "Software engineering internship";
const PROBE_ARM_ID: &str = "__health_probe__";

/// Binary reward: `1.0` iff the student applied and was approved.
pub fn feedback_reward(applied: bool, approved: bool) -> f64 {
    if applied && approved { 1.0 } else { 0.0 }
}

/// `0.4·similarity + 0.4·policy + 0.2·bandit`.
pub fn blend_scores(similarity: f32, policy: f32, bandit: f32) -> f32 {
    SIMILARITY_WEIGHT * similarity + POLICY_WEIGHT * policy + BANDIT_WEIGHT * bandit
}

/// Matchmaking engine over an encoder `E` and an arm store `S`.
#[derive(Debug)]
pub struct Matchmaker<E: TextEncoder, S: ArmStore> {
    similarity: SimilarityService<E>,
    policy: PolicyScorer,
    bandit: LinUcbBandit<S>,
    default_top_k: usize,
}

impl Matchmaker<SbertEmbedder, FileArmStore> {
    /// Builds the production engine: sentence encoder (or stub when no model path is
    /// configured) and a file-backed arm store under `storage_path`.
    pub fn from_config(config: &Config) -> MatchResult<Self> {
        config.validate()?;

        let embedder = match &config.model_path {
            Some(dir) => SbertEmbedder::load(SbertConfig::new(dir))?,
            None => {
                warn!("No model path configured; similarity uses the stub encoder");
                SbertEmbedder::stub()?
            }
        };

        let store = FileArmStore::open(&config.storage_path)?;
        let bandit = LinUcbBandit::new(store, BanditConfig::with_alpha(config.bandit_alpha));

        info!(
            storage_path = %config.storage_path.display(),
            stub = embedder.is_stub(),
            alpha = config.bandit_alpha,
            "Matchmaker initialized"
        );

        Ok(Self::new(SimilarityService::new(embedder), PolicyScorer::new(), bandit)
            .with_default_top_k(config.default_top_k))
    }
}

impl<E: TextEncoder, S: ArmStore> Matchmaker<E, S> {
    pub fn new(
        similarity: SimilarityService<E>,
        policy: PolicyScorer,
        bandit: LinUcbBandit<S>,
    ) -> Self {
        Self {
            similarity,
            policy,
            bandit,
            default_top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_default_top_k(mut self, top_k: usize) -> Self {
        self.default_top_k = top_k;
        self
    }

    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }

    pub fn similarity(&self) -> &SimilarityService<E> {
        &self.similarity
    }

    pub fn policy(&self) -> &PolicyScorer {
        &self.policy
    }

    pub fn bandit(&self) -> &LinUcbBandit<S> {
        &self.bandit
    }

    /// Scores one pair on all three axes.
    pub fn calculate_match(
        &self,
        student: &StudentProfile,
        internship: &Internship,
    ) -> MatchExplanation {
        let similarity = self.similarity.similarity(
            &student.skills,
            &internship.skills_required,
            &internship.description,
        );
        let breakdown = self.policy.score(student, internship);
        let estimate = self
            .bandit
            .select(student, internship, similarity, breakdown.total);

        let final_score = blend_scores(similarity, breakdown.total, estimate.score);

        debug!(
            internship_id = %internship.id,
            similarity,
            policy = breakdown.total,
            bandit = estimate.score,
            final_score,
            "Candidate scored"
        );

        MatchExplanation {
            similarity_score: similarity,
            policy_score: breakdown.total,
            bandit_score: estimate.score,
            final_score,
            skill_matches: find_skill_matches(&student.skills, &internship.skills_required),
            cgpa_eligible: breakdown.is_cgpa_eligible(),
            location_match: breakdown.location.explanation,
            equity_boost: breakdown.social_category.explanation,
            participation_boost: breakdown.participation.explanation,
            confidence: estimate.confidence,
        }
    }

    /// Ranks active internships for `student` and returns the top `top_k`.
    ///
    /// Ties on the final score are broken by internship id. Fails only when two active
    /// candidates share an internship id; inactive records are dropped before that check.
    #[instrument(skip(self, student, internships), fields(student_id = %student.id, candidates = internships.len()))]
    pub fn get_recommendations(
        &self,
        student: &StudentProfile,
        internships: &[Internship],
        top_k: usize,
    ) -> MatchResult<Vec<Recommendation>> {
        let active: Vec<&Internship> = internships.iter().filter(|i| i.is_active).collect();

        let mut seen = HashSet::with_capacity(active.len());
        for internship in &active {
            if !seen.insert(internship.id.as_str()) {
                return Err(MatchError::DuplicateInternship {
                    id: internship.id.clone(),
                });
            }
        }

        if top_k == 0 {
            return Ok(Vec::new());
        }

        let mut scored: Vec<Recommendation> = active
            .into_iter()
            .map(|internship| {
                let explanation = self.calculate_match(student, internship);
                Recommendation {
                    internship: internship.clone(),
                    match_score: explanation.final_score,
                    explanation,
                    rank: 0,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.match_score
                .total_cmp(&a.match_score)
                .then_with(|| a.internship.id.cmp(&b.internship.id))
        });
        scored.truncate(top_k);

        for (i, recommendation) in scored.iter_mut().enumerate() {
            recommendation.rank = i + 1;
        }

        debug!(returned = scored.len(), "Recommendations ranked");
        Ok(scored)
    }

    /// [`get_recommendations`](Self::get_recommendations) with the configured default `top_k`.
    pub fn recommend(
        &self,
        student: &StudentProfile,
        internships: &[Internship],
    ) -> MatchResult<Vec<Recommendation>> {
        self.get_recommendations(student, internships, self.default_top_k)
    }

    /// Feeds one observed outcome back into the internship's arm.
    ///
    /// Similarity and policy are recomputed from the supplied records, so callers must pass
    /// the same data used at recommendation time. Failures are logged and dropped.
    #[instrument(skip(self, student, internship), fields(student_id = %student_id, internship_id = %internship_id))]
    pub fn record_feedback(
        &self,
        student_id: &str,
        internship_id: &str,
        student: &StudentProfile,
        internship: &Internship,
        applied: bool,
        approved: bool,
    ) {
        let similarity = self.similarity.similarity(
            &student.skills,
            &internship.skills_required,
            &internship.description,
        );
        let policy = self.policy.score(student, internship).total;
        let context = self.bandit.context(student, internship, similarity, policy);
        let reward = feedback_reward(applied, approved);

        match self
            .bandit
            .update(student_id, internship_id, &context, reward)
        {
            Ok(()) => info!(reward, applied, approved, "Feedback recorded"),
            Err(BanditError::LogAppend { source }) => error!(
                error = %source,
                reward,
                "Arm saved, interaction log append failed"
            ),
            Err(e) => error!(error = %e, reward, "Failed to record feedback"),
        }
    }

    /// Probes the encoder and the arm store.
    pub fn health_check(&self) -> HealthReport {
        let student: Vec<String> = PROBE_STUDENT_SKILLS.iter().map(|s| s.to_string()).collect();
        let internship: Vec<String> = PROBE_INTERNSHIP_SKILLS
            .iter()
            .map(|s| s.to_string())
            .collect();

        let probe = self
            .similarity
            .try_similarity(&student, &internship, PROBE_DESCRIPTION);
        let (probe_similarity, encoder_ok) = match probe {
            Ok(score) => (score, true),
            Err(e) => {
                warn!(error = %e, "Health probe encoding failed");
                (0.0, false)
            }
        };

        let store_ok = match self.bandit.store().load_arm(PROBE_ARM_ID) {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Health probe arm read failed");
                false
            }
        };

        let embedder = if self.similarity.encoder().is_stub() {
            "stub"
        } else {
            "model"
        };

        HealthReport {
            status: if encoder_ok && store_ok { "healthy" } else { "degraded" }.to_string(),
            embedder: embedder.to_string(),
            probe_similarity,
            arm_store: if store_ok { "ready" } else { "unavailable" }.to_string(),
        }
    }
}

impl<E, S> Matchmaker<E, S>
where
    E: TextEncoder + 'static,
    S: ArmStore + 'static,
{
    /// Runs [`record_feedback`](Self::record_feedback) on Tokio's blocking pool.
    ///
    /// Must be called from within a Tokio runtime. The returned handle may be dropped.
    pub fn record_feedback_detached(
        self: &Arc<Self>,
        student: StudentProfile,
        internship: Internship,
        applied: bool,
        approved: bool,
    ) -> JoinHandle<()> {
        let engine = Arc::clone(self);
        tokio::task::spawn_blocking(move || {
            engine.record_feedback(
                &student.id,
                &internship.id,
                &student,
                &internship,
                applied,
                approved,
            );
        })
    }
}
