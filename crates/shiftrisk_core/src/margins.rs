//! Margin generation
//!
//! Turns the statistical roster description (workforce tiers, cover model)
//! into concrete per-worker shift totals and per-shift cover requirements,
//! and rebalances the row totals so both grand totals agree exactly before
//! the sampler sees them.

use rand::seq::SliceRandom;
use rand::{Rng, distr::Distribution};
use rand_distr::Normal;

use crate::error::MarginError;
use crate::model::{CoverModel, TierSpec};

/// Hours in a week; converts contracted hours to a shift fill rate.
const WEEK_HOURS: f64 = 168.0;

/// Per-worker shift totals for one roster period.
///
/// Tiers expand to one entry per worker and the roster is shuffled so tier
/// membership is not correlated with row order. Each worker's fill rate is
/// a normal draw from their tier's weekly hours, clamped to [0, 1].
pub fn generate_row_sums<R: Rng + ?Sized>(
    tiers: &[TierSpec],
    n_shifts: usize,
    rng: &mut R,
) -> Result<Vec<u32>, MarginError> {
    let mut roster: Vec<TierSpec> = Vec::with_capacity(TierSpec::roster_size(tiers) as usize);
    for tier in tiers {
        for _ in 0..tier.headcount {
            roster.push(*tier);
        }
    }
    roster.shuffle(rng);

    let mut row_sums = Vec::with_capacity(roster.len());
    for tier in &roster {
        let rate_mean = tier.weekly_hours_mean / WEEK_HOURS;
        let rate_sd = tier.weekly_hours_sd / WEEK_HOURS;
        let normal =
            Normal::new(rate_mean, rate_sd).map_err(|_| MarginError::InvalidDistribution {
                what: "tier fill rate",
                mean: rate_mean,
                std_dev: rate_sd,
            })?;
        let rate = normal.sample(rng).clamp(0.0, 1.0);
        row_sums.push((rate * n_shifts as f64).round() as u32);
    }

    Ok(row_sums)
}

/// Per-shift cover requirements, alternating day and night shifts.
pub fn generate_col_sums<R: Rng + ?Sized>(
    cover: &CoverModel,
    n_shifts: usize,
    rng: &mut R,
) -> Result<Vec<u32>, MarginError> {
    let day = Normal::new(cover.day_mean, cover.day_sd).map_err(|_| {
        MarginError::InvalidDistribution {
            what: "day cover",
            mean: cover.day_mean,
            std_dev: cover.day_sd,
        }
    })?;
    let night = Normal::new(cover.night_mean, cover.night_sd).map_err(|_| {
        MarginError::InvalidDistribution {
            what: "night cover",
            mean: cover.night_mean,
            std_dev: cover.night_sd,
        }
    })?;

    let mut col_sums = Vec::with_capacity(n_shifts);
    for shift in 0..n_shifts {
        let staff = if shift % 2 == 0 {
            day.sample(rng)
        } else {
            night.sample(rng)
        };
        let staff = staff.clamp(f64::from(cover.min_cover), f64::from(cover.max_cover));
        col_sums.push(staff.round() as u32);
    }

    Ok(col_sums)
}

/// Scale row totals so they sum exactly to `target_total`.
///
/// Rows are scaled proportionally and rounded; the rounding residual is
/// absorbed by the first row so the grand totals match exactly. Fails if
/// there is no row weight to scale, or if the residual would drive the
/// first row negative.
pub fn rebalance_row_sums(row_sums: &[u32], target_total: u64) -> Result<Vec<u32>, MarginError> {
    let raw_total: u64 = row_sums.iter().map(|&r| u64::from(r)).sum();
    if raw_total == 0 {
        if target_total == 0 {
            return Ok(row_sums.to_vec());
        }
        return Err(MarginError::EmptyRowSums { target_total });
    }

    let scale = target_total as f64 / raw_total as f64;
    let mut scaled: Vec<i64> = row_sums
        .iter()
        .map(|&r| (f64::from(r) * scale).round() as i64)
        .collect();
    let scaled_total: i64 = scaled.iter().sum();
    scaled[0] += target_total as i64 - scaled_total;

    scaled
        .into_iter()
        .enumerate()
        .map(|(worker, value)| {
            u32::try_from(value).map_err(|_| MarginError::RebalanceUnderflow { worker })
        })
        .collect()
}
