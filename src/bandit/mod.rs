//! Contextual bandit (LinUCB) providing the adaptive axis of the match score.
//!
//! Each internship is one arm with ridge-regression state `(A, b)` persisted through an
//! [`ArmStore`](crate::storage::ArmStore). Selection computes
//! `θᵀx + α √(xᵀ A⁻¹ x)` with `θ = A⁻¹ b`; feedback applies `A += xxᵀ`, `b += r·x`.

mod arm;
mod config;
pub mod context;
pub mod error;
pub mod linalg;
mod linucb;


pub use arm::ArmState;
pub use config::BanditConfig;
pub use context::build_context_vector;
pub use error::{BanditError, BanditResult};
pub use linucb::{BanditEstimate, LinUcbBandit};
