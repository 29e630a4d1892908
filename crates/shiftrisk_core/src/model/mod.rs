//! Core data types shared by the sampler, the estimator and margin
//! generation.

mod matrix;
mod tiers;

pub use matrix::RosterMatrix;
pub use tiers::{CoverModel, TierSpec, default_tiers};

/// One maximum per Monte Carlo run, in run order.
pub type MaximaSequence = Vec<u32>;
