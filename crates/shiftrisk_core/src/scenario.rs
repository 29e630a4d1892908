//! End-to-end scenario orchestration
//!
//! Wires the pipeline together: generate margins from the tier and cover
//! models, rebalance the row totals to the cover total, run the Monte Carlo
//! estimator, and summarize the maxima.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::analysis::MaximaDistribution;
use crate::error::ScenarioError;
use crate::margins::{generate_col_sums, generate_row_sums, rebalance_row_sums};
use crate::model::{CoverModel, MaximaSequence, TierSpec, default_tiers};
use crate::simulation::{MonteCarloConfig, monte_carlo_max_exposure};

/// Everything needed to run one incident-exposure scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Master seed for margin generation and all Monte Carlo runs.
    pub seed: u64,
    /// Roster period length in days.
    pub n_days: usize,
    /// Shifts per day (2 for a day/night pattern).
    pub shifts_per_day: usize,
    /// Incident shifts overlaid on each run.
    pub incident_count: usize,
    /// Number of Monte Carlo runs.
    pub runs: usize,
    /// Swap attempts used to mix each sampled matrix.
    pub swaps: u64,
    /// Workforce tiers; one matrix row per worker across all tiers.
    pub tiers: Vec<TierSpec>,
    /// Per-shift staffing demand model.
    pub cover: CoverModel,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 123,
            n_days: 384,
            shifts_per_day: 2,
            incident_count: 20,
            runs: 1000,
            swaps: 20_000,
            tiers: default_tiers(),
            cover: CoverModel::default(),
        }
    }
}

impl ScenarioConfig {
    /// Total shifts in the period.
    #[must_use]
    pub fn n_shifts(&self) -> usize {
        self.n_days * self.shifts_per_day
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_days(mut self, n_days: usize) -> Self {
        self.n_days = n_days;
        self
    }

    #[must_use]
    pub fn with_incidents(mut self, incident_count: usize) -> Self {
        self.incident_count = incident_count;
        self
    }

    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    #[must_use]
    pub fn with_swaps(mut self, swaps: u64) -> Self {
        self.swaps = swaps;
        self
    }

    #[must_use]
    pub fn with_tiers(mut self, tiers: Vec<TierSpec>) -> Self {
        self.tiers = tiers;
        self
    }

    #[must_use]
    pub fn with_cover(mut self, cover: CoverModel) -> Self {
        self.cover = cover;
        self
    }
}

/// Inputs and outputs of one completed scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Rebalanced per-worker shift totals the runs were sampled against.
    pub row_sums: Vec<u32>,
    /// Per-shift cover requirements.
    pub col_sums: Vec<u32>,
    /// One maximum per run, in run order.
    pub maxima: MaximaSequence,
    /// Summary of the maxima; `None` when zero runs were requested.
    pub distribution: Option<MaximaDistribution>,
}

/// Run one scenario end to end. Deterministic per seed.
pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioReport, ScenarioError> {
    if TierSpec::roster_size(&config.tiers) == 0 {
        return Err(ScenarioError::EmptyRoster);
    }
    let n_shifts = config.n_shifts();

    // Margin generation consumes its own stream so changing the run count
    // does not perturb the margins.
    let mut margin_rng = SmallRng::seed_from_u64(config.seed);
    let row_sums = generate_row_sums(&config.tiers, n_shifts, &mut margin_rng)?;
    let col_sums = generate_col_sums(&config.cover, n_shifts, &mut margin_rng)?;

    let target_total: u64 = col_sums.iter().map(|&c| u64::from(c)).sum();
    let row_sums = rebalance_row_sums(&row_sums, target_total)?;

    let mc = MonteCarloConfig {
        runs: config.runs,
        swaps: config.swaps,
        incident_count: config.incident_count,
        seed: config.seed,
    };
    let maxima = monte_carlo_max_exposure(&row_sums, &col_sums, &mc)?;
    let distribution = MaximaDistribution::from_maxima(&maxima);

    Ok(ScenarioReport {
        row_sums,
        col_sums,
        maxima,
        distribution,
    })
}
