#![forbid(unsafe_code)]

//! Work items a [`Player`](crate::Player) can run.

use algoviz_core::{RunPhase, RunStats, SearchAlgorithm, SortAlgorithm};
use algoviz_engine::{SearchReport, SortReport};

/// One algorithm run over an owned copy of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Sort {
        algorithm: SortAlgorithm,
        values: Vec<i64>,
    },
    Search {
        algorithm: SearchAlgorithm,
        values: Vec<i64>,
        target: i64,
    },
}

impl Job {
    /// Catalog key of the job's algorithm.
    #[must_use]
    pub fn algorithm_key(&self) -> &'static str {
        match self {
            Self::Sort { algorithm, .. } => algorithm.key(),
            Self::Search { algorithm, .. } => algorithm.key(),
        }
    }

    #[must_use]
    pub fn values(&self) -> &[i64] {
        match self {
            Self::Sort { values, .. } | Self::Search { values, .. } => values,
        }
    }
}

/// What a finished job produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobReport {
    /// A sort run and the buffer it left behind (sorted, or a permutation
    /// of the input if cancelled).
    Sorted { report: SortReport, values: Vec<i64> },
    Searched(SearchReport),
}

impl JobReport {
    #[must_use]
    pub fn phase(&self) -> RunPhase {
        match self {
            Self::Sorted { report, .. } => report.phase,
            Self::Searched(report) => report.phase,
        }
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        match self {
            Self::Sorted { report, .. } => report.stats,
            Self::Searched(report) => report.stats,
        }
    }
}
