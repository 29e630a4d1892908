//! Workforce tier and shift cover models
//!
//! These describe the statistical shape of the roster: how many shifts each
//! worker is expected to pick up, and how many workers each shift needs.
//! Margin generation samples from them to produce concrete row and column
//! totals.

use serde::{Deserialize, Serialize};

/// One workforce tier: headcount plus the hours its members typically work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierSpec {
    /// Mean contracted hours per week.
    pub weekly_hours_mean: f64,
    /// Week-to-week spread of worked hours.
    pub weekly_hours_sd: f64,
    /// Number of workers in this tier.
    pub headcount: u32,
}

impl TierSpec {
    /// A tier with the given weekly-hours distribution and headcount.
    #[must_use]
    pub const fn new(weekly_hours_mean: f64, weekly_hours_sd: f64, headcount: u32) -> Self {
        Self {
            weekly_hours_mean,
            weekly_hours_sd,
            headcount,
        }
    }

    /// Total workers across a tier list.
    #[must_use]
    pub fn roster_size(tiers: &[TierSpec]) -> u32 {
        tiers.iter().map(|t| t.headcount).sum()
    }
}

/// The five-tier roster the incident model was calibrated against.
///
/// Hours correspond to roughly 3, 2, 1.5, 0.75 and 4 twelve-hour shifts per
/// week.
#[must_use]
pub fn default_tiers() -> Vec<TierSpec> {
    vec![
        TierSpec::new(36.0, 3.0, 15),
        TierSpec::new(24.0, 4.0, 10),
        TierSpec::new(18.0, 3.0, 9),
        TierSpec::new(9.0, 2.0, 3),
        TierSpec::new(48.0, 2.0, 1),
    ]
}

/// Staffing demand for alternating day and night shifts.
///
/// Even-indexed shifts are days, odd-indexed shifts are nights. Samples are
/// clamped to `[min_cover, max_cover]` before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverModel {
    /// Mean staff on a day shift.
    pub day_mean: f64,
    /// Spread of day-shift cover.
    pub day_sd: f64,
    /// Mean staff on a night shift.
    pub night_mean: f64,
    /// Spread of night-shift cover.
    pub night_sd: f64,
    /// Hard floor on staff per shift.
    pub min_cover: u32,
    /// Hard ceiling on staff per shift.
    pub max_cover: u32,
}

impl Default for CoverModel {
    /// Day and night cover estimated from contracted-hours returns for a
    /// sixteen-bed unit.
    fn default() -> Self {
        Self {
            day_mean: 8.78,
            day_sd: 2.39,
            night_mean: 5.63,
            night_sd: 0.81,
            min_cover: 3,
            max_cover: 12,
        }
    }
}
