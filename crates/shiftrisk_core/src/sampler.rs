//! Margin-constrained random binary matrix sampling
//!
//! Produces an assignment matrix whose row and column sums match the given
//! margins exactly: a greedy largest-remaining-quota fill builds a feasible
//! matrix, then a chain of randomized margin-preserving 2×2 swaps mixes it.
//! The swap chain is a finite-length mixing heuristic, not an exact uniform
//! sampler; more swap attempts buy better mixing at linear cost.

use rand::Rng;

use crate::error::{MarginError, SampleError};
use crate::model::RosterMatrix;

/// Check that margins can describe a workers × shifts binary matrix.
///
/// Totals must balance and every individual margin must fit its dimension.
/// Violations fail here, before any construction.
pub fn validate_margins(row_sums: &[u32], col_sums: &[u32]) -> Result<(), MarginError> {
    let row_total: u64 = row_sums.iter().map(|&r| u64::from(r)).sum();
    let col_total: u64 = col_sums.iter().map(|&c| u64::from(c)).sum();
    if row_total != col_total {
        return Err(MarginError::TotalsMismatch {
            row_total,
            col_total,
        });
    }

    let n_workers = row_sums.len();
    let n_shifts = col_sums.len();
    for (worker, &row_sum) in row_sums.iter().enumerate() {
        if row_sum as usize > n_shifts {
            return Err(MarginError::RowSumTooLarge {
                worker,
                row_sum,
                n_shifts,
            });
        }
    }
    for (shift, &col_sum) in col_sums.iter().enumerate() {
        if col_sum as usize > n_workers {
            return Err(MarginError::ColSumTooLarge {
                shift,
                col_sum,
                n_workers,
            });
        }
    }

    Ok(())
}

/// Greedy largest-remaining-quota fill.
///
/// Columns are processed in index order. Each unit of a column's demand goes
/// to the worker with the highest remaining quota not already on that shift,
/// first index winning ties. The stable left-to-right scan makes the
/// zero-swap matrix reproducible.
pub(crate) fn greedy_fill(
    row_sums: &[u32],
    col_sums: &[u32],
) -> Result<RosterMatrix, SampleError> {
    let n_workers = row_sums.len();
    let n_shifts = col_sums.len();
    let mut matrix = RosterMatrix::zeros(n_workers, n_shifts);
    let mut quotas: Vec<u32> = row_sums.to_vec();

    for (shift, &demand) in col_sums.iter().enumerate() {
        for _ in 0..demand {
            let mut best: Option<usize> = None;
            for worker in 0..n_workers {
                if matrix.get(worker, shift) == 1 {
                    continue;
                }
                match best {
                    Some(b) if quotas[worker] <= quotas[b] => {}
                    _ => best = Some(worker),
                }
            }
            // Balanced, in-bounds margins always leave an available worker
            // with quota; running dry means they were not realizable.
            let chosen = match best {
                Some(worker) if quotas[worker] > 0 => worker,
                _ => return Err(SampleError::QuotaExhausted { shift }),
            };
            matrix.set(chosen, shift, 1);
            quotas[chosen] -= 1;
        }
    }

    Ok(matrix)
}

/// Run `n_swaps` randomized 2×2 swap attempts over the matrix.
///
/// Each attempt draws two distinct workers (a colliding second draw shifts
/// to the next worker, wrapping) and two shifts drawn independently. If the
/// four cells form a checkerboard quad the cells flip; otherwise the attempt
/// is a no-op. Every attempt, applied or skipped, leaves all row and column
/// sums unchanged.
pub(crate) fn mix_by_swaps<R: Rng + ?Sized>(matrix: &mut RosterMatrix, n_swaps: u64, rng: &mut R) {
    let n_workers = matrix.n_workers();
    let n_shifts = matrix.n_shifts();
    // No swappable quad exists below 2×2.
    if n_workers < 2 || n_shifts < 2 {
        return;
    }

    for _ in 0..n_swaps {
        let i = rng.random_range(0..n_workers);
        let mut k = rng.random_range(0..n_workers);
        if k == i {
            k = (k + 1) % n_workers;
        }
        let j = rng.random_range(0..n_shifts);
        let l = rng.random_range(0..n_shifts);

        if matrix.get(i, j) == 1
            && matrix.get(k, l) == 1
            && matrix.get(i, l) == 0
            && matrix.get(k, j) == 0
        {
            matrix.set(i, j, 0);
            matrix.set(k, l, 0);
            matrix.set(i, l, 1);
            matrix.set(k, j, 1);
        }
    }
}

/// Sample one assignment matrix satisfying the margins exactly, mixed by
/// `n_swaps` random swap attempts.
///
/// `n_swaps = 0` returns the raw greedy matrix. The returned matrix's row
/// and column sums equal `row_sums` and `col_sums` for every `n_swaps`.
pub fn sample_assignment_matrix<R: Rng + ?Sized>(
    row_sums: &[u32],
    col_sums: &[u32],
    n_swaps: u64,
    rng: &mut R,
) -> Result<RosterMatrix, SampleError> {
    validate_margins(row_sums, col_sums)?;
    let mut matrix = greedy_fill(row_sums, col_sums)?;
    mix_by_swaps(&mut matrix, n_swaps, rng);
    Ok(matrix)
}
