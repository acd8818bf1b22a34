use chrono::Utc;

use super::error::{BanditError, BanditResult};
use super::linalg;
use crate::storage::ArmRecord;

/// Ridge-regression state of one arm: `A` (`d × d`, row-major) and `b` (`d`).
#[derive(Debug, Clone, PartialEq)]
pub struct ArmState {
    dim: usize,
    a: Vec<f64>,
    b: Vec<f64>,
}

impl ArmState {
    /// Fresh arm: `A = I`, `b = 0`.
    pub fn identity(dim: usize) -> Self {
        Self {
            dim,
            a: linalg::identity(dim),
            b: vec![0.0; dim],
        }
    }

    /// Rebuilds an arm from a stored record, rejecting records of another dimension.
    pub fn from_record(record: ArmRecord, dim: usize) -> BanditResult<Self> {
        let stored = record.dim as usize;
        if stored != dim || record.a.len() != dim * dim || record.b.len() != dim {
            return Err(BanditError::DimensionMismatch {
                expected: dim,
                actual: stored,
            });
        }
        Ok(Self {
            dim,
            a: record.a,
            b: record.b,
        })
    }

    pub fn to_record(&self, internship_id: &str) -> ArmRecord {
        ArmRecord {
            internship_id: internship_id.to_string(),
            dim: self.dim as u32,
            a: self.a.clone(),
            b: self.b.clone(),
            last_updated: Utc::now().timestamp(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// `θ = A⁻¹ b`.
    pub fn theta(&self) -> BanditResult<Vec<f64>> {
        let inv = linalg::invert(&self.a, self.dim).ok_or(BanditError::SingularMatrix)?;
        Ok(linalg::mat_vec(&inv, &self.b, self.dim))
    }

    /// Upper-confidence estimate for context `x`: returns `(θᵀx + c, c)` with
    /// `c = α √(xᵀ A⁻¹ x)`.
    pub fn estimate(&self, x: &[f64], alpha: f64) -> BanditResult<(f64, f64)> {
        self.check_dim(x)?;

        let inv = linalg::invert(&self.a, self.dim).ok_or(BanditError::SingularMatrix)?;
        let theta = linalg::mat_vec(&inv, &self.b, self.dim);
        let inv_x = linalg::mat_vec(&inv, x, self.dim);

        let mean = linalg::dot(&theta, x);
        let confidence = alpha * linalg::dot(x, &inv_x).max(0.0).sqrt();

        Ok((mean + confidence, confidence))
    }

    /// `A += x xᵀ`, `b += r x`.
    pub fn apply(&mut self, x: &[f64], reward: f64) -> BanditResult<()> {
        self.check_dim(x)?;
        if !reward.is_finite() {
            return Err(BanditError::InvalidReward { value: reward });
        }

        linalg::add_outer(&mut self.a, x, self.dim);
        for (b, xi) in self.b.iter_mut().zip(x) {
            *b += reward * xi;
        }
        Ok(())
    }

    fn check_dim(&self, x: &[f64]) -> BanditResult<()> {
        if x.len() != self.dim {
            return Err(BanditError::DimensionMismatch {
                expected: self.dim,
                actual: x.len(),
            });
        }
        Ok(())
    }
}
