//! Binary worker × shift assignment matrix
//!
//! The grid is stored as a flat byte buffer so the greedy fill and the swap
//! chain run as plain index arithmetic over primitive integers.

use serde::{Deserialize, Serialize};

/// A workers × shifts binary assignment grid.
///
/// A 1 at (worker, shift) means that worker covers that shift. While a
/// matrix is valid, row i sums to the worker's shift total and column j sums
/// to the shift's cover requirement, exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMatrix {
    n_workers: usize,
    n_shifts: usize,
    cells: Vec<u8>,
}

impl RosterMatrix {
    /// An all-zero matrix of the given dimensions.
    #[must_use]
    pub fn zeros(n_workers: usize, n_shifts: usize) -> Self {
        Self {
            n_workers,
            n_shifts,
            cells: vec![0; n_workers * n_shifts],
        }
    }

    /// Number of workers (rows).
    #[must_use]
    pub fn n_workers(&self) -> usize {
        self.n_workers
    }

    /// Number of shifts (columns).
    #[must_use]
    pub fn n_shifts(&self) -> usize {
        self.n_shifts
    }

    #[inline]
    fn idx(&self, worker: usize, shift: usize) -> usize {
        worker * self.n_shifts + shift
    }

    /// Cell value at (worker, shift), 0 or 1.
    #[inline]
    #[must_use]
    pub fn get(&self, worker: usize, shift: usize) -> u8 {
        self.cells[self.idx(worker, shift)]
    }

    /// Set the cell at (worker, shift).
    #[inline]
    pub fn set(&mut self, worker: usize, shift: usize, value: u8) {
        let i = self.idx(worker, shift);
        self.cells[i] = value;
    }

    /// Count of assigned shifts per worker.
    #[must_use]
    pub fn row_sums(&self) -> Vec<u32> {
        let mut sums = vec![0u32; self.n_workers];
        for (worker, sum) in sums.iter_mut().enumerate() {
            let start = worker * self.n_shifts;
            *sum = self.cells[start..start + self.n_shifts]
                .iter()
                .map(|&c| u32::from(c))
                .sum();
        }
        sums
    }

    /// Count of assigned workers per shift.
    #[must_use]
    pub fn col_sums(&self) -> Vec<u32> {
        let mut sums = vec![0u32; self.n_shifts];
        for worker in 0..self.n_workers {
            let start = worker * self.n_shifts;
            for (shift, sum) in sums.iter_mut().enumerate() {
                *sum += u32::from(self.cells[start + shift]);
            }
        }
        sums
    }

    /// One worker's assignment count restricted to a subset of shifts.
    #[must_use]
    pub fn row_count_in(&self, worker: usize, shifts: &[usize]) -> u32 {
        let start = worker * self.n_shifts;
        shifts
            .iter()
            .map(|&shift| u32::from(self.cells[start + shift]))
            .sum()
    }
}
