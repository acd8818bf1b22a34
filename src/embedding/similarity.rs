//! Semantic skill similarity between a student and an internship.

use tracing::{debug, warn};

use super::encoder::TextEncoder;
use super::error::EmbeddingError;

/// Scores student skills against an internship's skills and description.
///
/// Each side is embedded as one joined text (not per skill) so the encoder sees joint
/// context. Encoding failures never reach the caller: [`similarity`](Self::similarity)
/// degrades them to `0.0`.
#[derive(Debug)]
pub struct SimilarityService<E: TextEncoder> {
    encoder: E,
}

impl<E: TextEncoder> SimilarityService<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Similarity in `[0, 1]`; `0.0` on any encoding failure.
    pub fn similarity(
        &self,
        student_skills: &[String],
        internship_skills: &[String],
        internship_description: &str,
    ) -> f32 {
        match self.try_similarity(student_skills, internship_skills, internship_description) {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, "Similarity encoding failed, scoring 0.0");
                0.0
            }
        }
    }

    /// Like [`similarity`](Self::similarity) but surfaces encoder errors.
    pub fn try_similarity(
        &self,
        student_skills: &[String],
        internship_skills: &[String],
        internship_description: &str,
    ) -> Result<f32, EmbeddingError> {
        let student_text = student_skills.join(" ");
        let internship_text = format!("{} {}", internship_skills.join(" "), internship_description);

        let student_vec = self.embed_or_zero(&student_text)?;
        let internship_vec = self.embed_or_zero(&internship_text)?;

        let raw = cosine_similarity(&student_vec, &internship_vec);
        let score = clamp_similarity(raw);

        debug!(raw, score, "Computed skill similarity");

        Ok(score)
    }

    /// Blank text maps to the zero vector of the encoder's native width.
    fn embed_or_zero(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let dim = self.encoder.dimension();
        if text.trim().is_empty() {
            return Ok(vec![0.0; dim]);
        }

        let vector = self
            .encoder
            .encode(&[text])?
            .pop()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: "encoder returned no vectors".to_string(),
            })?;

        if vector.len() != dim {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dim,
                actual: vector.len(),
            });
        }

        Ok(vector)
    }
}

/// Cosine similarity; `0.0` for mismatched lengths or zero-norm inputs.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Negative cosines (opposed meaning) count as no similarity.
#[inline]
fn clamp_similarity(raw: f32) -> f32 {
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
}
