//! Shift-roster incident exposure simulation library
//!
//! This crate estimates, via Monte Carlo simulation, the distribution of the
//! worst per-worker incident exposure on a shift roster when assignments are
//! random but constrained by per-worker shift totals and per-shift cover
//! requirements. It supports:
//! - Margin-constrained binary matrix sampling (greedy fill + swap mixing)
//! - Monte Carlo estimation of the maximum per-worker incident exposure
//! - Realistic margin generation from workforce tiers and cover models
//! - Empirical distribution queries (quantiles, exceedance probability)
//!
//! # Quick start
//!
//! ```ignore
//! use shiftrisk_core::{ScenarioConfig, run_scenario};
//!
//! let config = ScenarioConfig::default()
//!     .with_seed(2025)
//!     .with_incidents(50)
//!     .with_runs(1000);
//!
//! let report = run_scenario(&config)?;
//! let dist = report.distribution.expect("at least one run");
//! println!("P(max >= 6) = {:.3}", dist.exceedance_probability(6));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod margins;
pub mod sampler;
pub mod scenario;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::MaximaDistribution;
pub use model::{CoverModel, MaximaSequence, RosterMatrix, TierSpec, default_tiers};
pub use sampler::sample_assignment_matrix;
pub use scenario::{ScenarioConfig, ScenarioReport, run_scenario};
pub use simulation::{MonteCarloConfig, monte_carlo_max_exposure, simulate_run};
