//! Internship matchmaking engine.
//!
//! Scores (student, internship) pairs on three independent axes and blends them into one
//! ranked, explainable list:
//!
//! - **Similarity** ([`SimilarityService`]) - sentence-embedding cosine between the
//!   student's skills and the internship's skills plus description.
//! - **Policy** ([`PolicyScorer`]) - seven weighted equity and eligibility factors.
//! - **Bandit** ([`LinUcbBandit`]) - LinUCB over a per-internship arm, updated from
//!   application outcomes and persisted through an [`ArmStore`].
//!
//! [`Matchmaker`] wires the three together.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Matchmaker`], [`MatchError`], [`HealthReport`] - orchestration
//! - [`StudentProfile`], [`Internship`], [`Recommendation`], [`MatchExplanation`] - records
//! - [`Config`], [`ConfigError`] - environment configuration
//!
//! ## Components
//! - [`SbertEmbedder`], [`SbertConfig`], [`TextEncoder`] - embeddings
//! - [`PolicyBreakdown`], [`FactorScore`] - policy rationale
//! - [`ArmState`], [`BanditConfig`], [`BanditEstimate`] - bandit state
//! - [`FileArmStore`], [`InMemoryArmStore`] - arm persistence
//!
//! # Example
//!
//! ```no_run
//! use matchmaker::{Config, Internship, Matchmaker, StudentProfile};
//!
//! let engine = Matchmaker::from_config(&Config::from_env()?)?;
//! let student = StudentProfile::default();
//! let internships: Vec<Internship> = Vec::new();
//! let ranked = engine.get_recommendations(&student, &internships, 5)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bandit;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod hashing;
pub mod matchmaker;
pub mod model;
pub mod scoring;
pub mod storage;

pub use bandit::{ArmState, BanditConfig, BanditError, BanditEstimate, LinUcbBandit};
pub use config::{Config, ConfigError};
pub use constants::{CONTEXT_DIM, DimValidationError, EMBEDDING_DIM, validate_context_dim};
pub use embedding::{
    EmbeddingError, SBERT_EMBEDDING_DIM, SBERT_MAX_SEQ_LEN, SbertConfig, SbertEmbedder,
    SimilarityService, TextEncoder, cosine_similarity,
};
pub use hashing::{arm_storage_key, hash_to_u64};
pub use matchmaker::{HealthReport, MatchError, MatchResult, Matchmaker, find_skill_matches};
pub use model::{
    Internship, InternshipType, MatchExplanation, ParticipationType, Recommendation,
    SocialCategory, StudentProfile,
};
pub use scoring::{FactorScore, LocationMatch, PolicyBreakdown, PolicyScorer};
pub use storage::{
    ArmRecord, ArmStore, FileArmStore, InMemoryArmStore, InteractionRecord, StorageError,
};
