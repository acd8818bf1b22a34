use crate::constants::{CONTEXT_DIM, DEFAULT_ALPHA};

/// LinUCB parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BanditConfig {
    /// Context dimensionality `d`; every arm is `d × d`.
    pub context_dim: usize,
    /// Exploration constant.
    pub alpha: f64,
}

impl Default for BanditConfig {
    fn default() -> Self {
        Self {
            context_dim: CONTEXT_DIM,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl BanditConfig {
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }
}
