//! Tests for tier/cover margin generation and rebalancing
//!
//! These tests verify that:
//! - Generated margins have the right shape and respect their bounds
//! - Rebalancing hits the target total exactly
//! - Generation is reproducible per seed and rejects bad distributions

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::MarginError;
use crate::margins::{generate_col_sums, generate_row_sums, rebalance_row_sums};
use crate::model::{CoverModel, TierSpec};

fn small_tiers() -> Vec<TierSpec> {
    vec![TierSpec::new(36.0, 3.0, 3), TierSpec::new(18.0, 2.0, 2)]
}

/// One row per worker, and no worker can exceed the shift count: the fill
/// rate is clamped to [0, 1] before scaling.
#[test]
fn test_row_sums_shape_and_bounds() {
    let n_shifts = 28;
    let mut rng = SmallRng::seed_from_u64(17);
    let row_sums = generate_row_sums(&small_tiers(), n_shifts, &mut rng).unwrap();

    assert_eq!(row_sums.len(), 5, "one row per worker across all tiers");
    for (worker, &row_sum) in row_sums.iter().enumerate() {
        assert!(
            row_sum as usize <= n_shifts,
            "worker {worker}: total {row_sum} exceeds {n_shifts} shifts"
        );
    }
}

/// Cover draws are clamped to the model's bounds before rounding.
#[test]
fn test_col_sums_within_cover_bounds() {
    let cover = CoverModel::default();
    let n_shifts = 60;
    let mut rng = SmallRng::seed_from_u64(23);
    let col_sums = generate_col_sums(&cover, n_shifts, &mut rng).unwrap();

    assert_eq!(col_sums.len(), n_shifts);
    for (shift, &col_sum) in col_sums.iter().enumerate() {
        assert!(
            col_sum >= cover.min_cover && col_sum <= cover.max_cover,
            "shift {shift}: cover {col_sum} outside [{}, {}]",
            cover.min_cover,
            cover.max_cover
        );
    }
}

/// Same seed, same models: identical margins.
#[test]
fn test_generation_deterministic_per_seed() {
    let tiers = small_tiers();
    let cover = CoverModel::default();

    let mut rng_a = SmallRng::seed_from_u64(31);
    let mut rng_b = SmallRng::seed_from_u64(31);

    let rows_a = generate_row_sums(&tiers, 56, &mut rng_a).unwrap();
    let cols_a = generate_col_sums(&cover, 56, &mut rng_a).unwrap();
    let rows_b = generate_row_sums(&tiers, 56, &mut rng_b).unwrap();
    let cols_b = generate_col_sums(&cover, 56, &mut rng_b).unwrap();

    assert_eq!(rows_a, rows_b);
    assert_eq!(cols_a, cols_b);
}

/// Rebalanced rows sum to the target exactly; the residual lands in the
/// first row.
#[test]
fn test_rebalance_hits_target_exactly() {
    let cases: &[(&[u32], u64)] = &[
        (&[10, 20, 30], 66),
        (&[10, 20, 30], 54),
        (&[7], 11),
        (&[1, 1, 1, 1], 1),
        (&[5, 5], 10),
    ];

    for (case, (row_sums, target)) in cases.iter().enumerate() {
        let rebalanced = rebalance_row_sums(row_sums, *target).unwrap();
        let total: u64 = rebalanced.iter().map(|&r| u64::from(r)).sum();
        assert_eq!(total, *target, "case {case}: total missed the target");
        assert_eq!(rebalanced.len(), row_sums.len());
    }
}

/// An already balanced vector passes through unchanged except for rounding.
#[test]
fn test_rebalance_identity_when_balanced() {
    let row_sums = [4, 6, 10];
    let rebalanced = rebalance_row_sums(&row_sums, 20).unwrap();
    assert_eq!(rebalanced, row_sums.to_vec());
}

/// Zero weight cannot absorb a positive target.
#[test]
fn test_rebalance_rejects_zero_weight() {
    let err = rebalance_row_sums(&[0, 0, 0], 5).unwrap_err();
    assert_eq!(err, MarginError::EmptyRowSums { target_total: 5 });

    // Zero weight to a zero target is a no-op, not an error.
    assert_eq!(rebalance_row_sums(&[0, 0], 0).unwrap(), vec![0, 0]);
}

/// A negative spread is not a usable normal distribution.
#[test]
fn test_invalid_cover_distribution_rejected() {
    let cover = CoverModel {
        day_sd: -1.0,
        ..CoverModel::default()
    };
    let mut rng = SmallRng::seed_from_u64(0);
    let err = generate_col_sums(&cover, 4, &mut rng).unwrap_err();
    assert!(
        matches!(err, MarginError::InvalidDistribution { what: "day cover", .. }),
        "expected InvalidDistribution, got {err:?}"
    );
}
