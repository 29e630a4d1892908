use std::fmt;

/// Errors in margin totals or margin generation.
#[derive(Debug, Clone, PartialEq)]
pub enum MarginError {
    /// Row and column grand totals disagree; no matrix can satisfy both.
    TotalsMismatch { row_total: u64, col_total: u64 },
    /// A worker's shift total exceeds the number of shifts in the period.
    RowSumTooLarge {
        worker: usize,
        row_sum: u32,
        n_shifts: usize,
    },
    /// A shift's cover requirement exceeds the roster size.
    ColSumTooLarge {
        shift: usize,
        col_sum: u32,
        n_workers: usize,
    },
    /// Rebalancing was asked to spread a positive total over zero weight.
    EmptyRowSums { target_total: u64 },
    /// Rebalancing pushed a row total below zero.
    RebalanceUnderflow { worker: usize },
    /// A tier or cover distribution has unusable parameters.
    InvalidDistribution {
        what: &'static str,
        mean: f64,
        std_dev: f64,
    },
}

impl fmt::Display for MarginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginError::TotalsMismatch {
                row_total,
                col_total,
            } => {
                write!(
                    f,
                    "row totals sum to {row_total} but column totals sum to {col_total}"
                )
            }
            MarginError::RowSumTooLarge {
                worker,
                row_sum,
                n_shifts,
            } => {
                write!(
                    f,
                    "worker {worker} has shift total {row_sum} but the period only has {n_shifts} shifts"
                )
            }
            MarginError::ColSumTooLarge {
                shift,
                col_sum,
                n_workers,
            } => {
                write!(
                    f,
                    "shift {shift} requires {col_sum} workers but the roster only has {n_workers}"
                )
            }
            MarginError::EmptyRowSums { target_total } => {
                write!(
                    f,
                    "cannot rebalance zero row weight to a total of {target_total}"
                )
            }
            MarginError::RebalanceUnderflow { worker } => {
                write!(f, "rebalancing drove worker {worker}'s shift total negative")
            }
            MarginError::InvalidDistribution {
                what,
                mean,
                std_dev,
            } => {
                write!(
                    f,
                    "invalid {what} parameters (mean={mean}, std_dev={std_dev}): std_dev must be non-negative and finite"
                )
            }
        }
    }
}

impl std::error::Error for MarginError {}

/// Errors raised while sampling an assignment matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    Margin(MarginError),
    /// The greedy fill needed a worker with remaining quota and found none.
    /// The margins balanced in total but were not realizable as a binary
    /// matrix.
    QuotaExhausted { shift: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Margin(e) => write!(f, "{e}"),
            SampleError::QuotaExhausted { shift } => {
                write!(
                    f,
                    "no worker has remaining quota while filling shift {shift}"
                )
            }
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Margin(e) => Some(e),
            SampleError::QuotaExhausted { .. } => None,
        }
    }
}

impl From<MarginError> for SampleError {
    fn from(e: MarginError) -> Self {
        SampleError::Margin(e)
    }
}

/// Errors raised by the Monte Carlo estimator.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Sample(SampleError),
    /// More incident shifts requested than shifts in the period.
    IncidentCountOutOfRange {
        incident_count: usize,
        n_shifts: usize,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Sample(e) => write!(f, "{e}"),
            SimulationError::IncidentCountOutOfRange {
                incident_count,
                n_shifts,
            } => {
                write!(
                    f,
                    "incident count {incident_count} exceeds the {n_shifts} shifts in the period"
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Sample(e) => Some(e),
            SimulationError::IncidentCountOutOfRange { .. } => None,
        }
    }
}

impl From<SampleError> for SimulationError {
    fn from(e: SampleError) -> Self {
        SimulationError::Sample(e)
    }
}

impl From<MarginError> for SimulationError {
    fn from(e: MarginError) -> Self {
        SimulationError::Sample(SampleError::Margin(e))
    }
}

/// Errors raised by end-to-end scenario orchestration.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    Margin(MarginError),
    Simulation(SimulationError),
    /// Every tier has zero headcount; there is nobody to roster.
    EmptyRoster,
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Margin(e) => write!(f, "{e}"),
            ScenarioError::Simulation(e) => write!(f, "{e}"),
            ScenarioError::EmptyRoster => write!(f, "tier roster has zero total headcount"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Margin(e) => Some(e),
            ScenarioError::Simulation(e) => Some(e),
            ScenarioError::EmptyRoster => None,
        }
    }
}

impl From<MarginError> for ScenarioError {
    fn from(e: MarginError) -> Self {
        ScenarioError::Margin(e)
    }
}

impl From<SimulationError> for ScenarioError {
    fn from(e: SimulationError) -> Self {
        ScenarioError::Simulation(e)
    }
}
