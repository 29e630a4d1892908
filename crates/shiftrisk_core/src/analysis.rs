//! Empirical distribution of run maxima
//!
//! The estimator hands back one maximum per run; this module turns that
//! sequence into the queries reporting cares about: frequency counts,
//! quantiles, and the empirical probability that a run maximum reaches an
//! observed value.

use serde::{Deserialize, Serialize};

/// Empirical distribution of the per-run maximum exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaximaDistribution {
    /// Smallest observed maximum.
    pub min: u32,
    /// Largest observed maximum.
    pub max: u32,
    /// Frequency of each value in `min..=max`; index 0 corresponds to `min`.
    pub counts: Vec<usize>,
    /// Number of runs the distribution was built from.
    pub runs: usize,
    sorted: Vec<u32>,
}

impl MaximaDistribution {
    /// Build the empirical distribution from a maxima sequence.
    ///
    /// Returns `None` for an empty sequence; a zero-run estimate has no
    /// distribution.
    #[must_use]
    pub fn from_maxima(maxima: &[u32]) -> Option<Self> {
        let min = maxima.iter().copied().min()?;
        let max = maxima.iter().copied().max()?;

        let mut counts = vec![0usize; (max - min) as usize + 1];
        for &m in maxima {
            counts[(m - min) as usize] += 1;
        }

        let mut sorted = maxima.to_vec();
        sorted.sort_unstable();

        Some(Self {
            min,
            max,
            counts,
            runs: maxima.len(),
            sorted,
        })
    }

    /// Mean of the run maxima.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sorted.iter().map(|&m| f64::from(m)).sum::<f64>() / self.runs as f64
    }

    /// Nearest-rank quantile for `q` in [0, 1].
    #[must_use]
    pub fn quantile(&self, q: f64) -> u32 {
        let q = q.clamp(0.0, 1.0);
        let rank = ((q * self.runs as f64).ceil() as usize).max(1) - 1;
        self.sorted[rank.min(self.runs - 1)]
    }

    /// Empirical probability that a run maximum is at least `threshold`.
    ///
    /// This is the p-value used to judge whether an observed worst-case
    /// exposure is surprising under random constrained assignment.
    #[must_use]
    pub fn exceedance_probability(&self, threshold: u32) -> f64 {
        let exceeding = self.sorted.iter().filter(|&&m| m >= threshold).count();
        exceeding as f64 / self.runs as f64
    }

    /// (value, count) pairs over the observed range, zero-count gaps
    /// included.
    pub fn frequencies(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(offset, &count)| (self.min + offset as u32, count))
    }
}
