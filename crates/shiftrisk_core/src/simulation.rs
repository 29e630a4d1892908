//! Monte Carlo estimation of the worst per-worker incident exposure
//!
//! Each run samples a fresh assignment matrix, overlays a random subset of
//! incident shifts, and records the maximum exposure any worker accumulated.
//! Runs draw from independent sub-streams derived from the master seed, so
//! the maxima sequence is a pure function of the seed and the margins
//! whether the batches execute serially or in parallel.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::SimulationError;
use crate::model::MaximaSequence;
use crate::sampler::{sample_assignment_matrix, validate_margins};

/// Runs are grouped into fixed-size batches; each batch derives its run
/// seeds from the master seed and its own index.
const BATCH_SIZE: usize = 100;

/// Knobs for one Monte Carlo estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Number of independent runs.
    pub runs: usize,
    /// Swap attempts used to mix each sampled matrix.
    pub swaps: u64,
    /// Incident shifts overlaid on each run.
    pub incident_count: usize,
    /// Master seed; every run seed is derived from it.
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            runs: 1000,
            swaps: 20_000,
            incident_count: 20,
            seed: 123,
        }
    }
}

/// One simulated run: sample a roster matrix, overlay `incident_count`
/// incident shifts drawn without replacement, and return the worst
/// per-worker exposure.
pub fn simulate_run<R: Rng + ?Sized>(
    row_sums: &[u32],
    col_sums: &[u32],
    n_swaps: u64,
    incident_count: usize,
    rng: &mut R,
) -> Result<u32, SimulationError> {
    let n_shifts = col_sums.len();
    if incident_count > n_shifts {
        return Err(SimulationError::IncidentCountOutOfRange {
            incident_count,
            n_shifts,
        });
    }

    let matrix = sample_assignment_matrix(row_sums, col_sums, n_swaps, rng)?;
    let incident_shifts = rand::seq::index::sample(rng, n_shifts, incident_count).into_vec();

    let mut max_exposure = 0u32;
    for worker in 0..matrix.n_workers() {
        let exposure = matrix.row_count_in(worker, &incident_shifts);
        if exposure > max_exposure {
            max_exposure = exposure;
        }
    }

    Ok(max_exposure)
}

/// Estimate the distribution of the maximum per-worker incident exposure.
///
/// Returns one maximum per run, in run-index order. Inputs are validated
/// before any run starts; a failing run aborts the whole estimate with no
/// partial results.
pub fn monte_carlo_max_exposure(
    row_sums: &[u32],
    col_sums: &[u32],
    config: &MonteCarloConfig,
) -> Result<MaximaSequence, SimulationError> {
    let n_shifts = col_sums.len();
    if config.incident_count > n_shifts {
        return Err(SimulationError::IncidentCountOutOfRange {
            incident_count: config.incident_count,
            n_shifts,
        });
    }
    validate_margins(row_sums, col_sums)?;

    let num_batches = config.runs.div_ceil(BATCH_SIZE);

    let run_batch = |batch: usize| -> Result<Vec<u32>, SimulationError> {
        let mut seeder = SmallRng::seed_from_u64(config.seed.wrapping_add(batch as u64));
        let batch_size = if batch == num_batches - 1 {
            config.runs - batch * BATCH_SIZE
        } else {
            BATCH_SIZE
        };

        (0..batch_size)
            .map(|_| {
                let mut rng = SmallRng::seed_from_u64(seeder.next_u64());
                simulate_run(
                    row_sums,
                    col_sums,
                    config.swaps,
                    config.incident_count,
                    &mut rng,
                )
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let batches: Result<Vec<Vec<u32>>, SimulationError> =
        (0..num_batches).into_par_iter().map(run_batch).collect();

    #[cfg(not(feature = "parallel"))]
    let batches: Result<Vec<Vec<u32>>, SimulationError> =
        (0..num_batches).map(run_batch).collect();

    Ok(batches?.into_iter().flatten().collect())
}
