#![forbid(unsafe_code)]

//! Searching engine.
//!
//! Searches read the buffer without mutating it. `comparisons` counts
//! probes; the hash search also reports the number of distinct keys in its
//! index as `hash_operations`.
//!
//! Binary and interpolation search reject input that is not ascending
//! before the first probe. The rejection is an [`EngineError::Unsorted`],
//! never a `NotFound`.

mod binary;
mod hash;
mod interpolation;
mod linear;

use algoviz_core::{
    EngineError, Pacer, RunControl, RunHandle, RunPhase, RunStats, SearchAlgorithm, VisualSink,
};

use algoviz_core::error::Result;

use crate::step::{Interrupted, StepContext};

/// Whether `values` is in non-decreasing order.
#[must_use]
pub fn is_ascending(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchOutcome {
    /// Index of the match (the earliest one for hash search).
    Found(usize),
    NotFound,
    /// Stopped before an answer was reached.
    Cancelled,
}

/// Outcome of one search run that passed its precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub algorithm: SearchAlgorithm,
    pub outcome: SearchOutcome,
    pub phase: RunPhase,
    pub stats: RunStats,
}

impl SearchReport {
    /// The matching index, if the search found one.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self.outcome {
            SearchOutcome::Found(index) => Some(index),
            SearchOutcome::NotFound | SearchOutcome::Cancelled => None,
        }
    }
}

/// Searching engine. Same ownership model as [`Sorter`](crate::Sorter).
pub struct Searcher<S, P> {
    sink: S,
    pacer: P,
    control: RunControl,
}

impl<S: VisualSink, P: Pacer> Searcher<S, P> {
    #[must_use]
    pub fn new(sink: S, pacer: P) -> Self {
        Self {
            sink,
            pacer,
            control: RunControl::new(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> RunHandle {
        self.control.handle()
    }

    pub fn stop(&self) {
        self.control.stop();
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.control.stats()
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.control.phase()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Search `values` for `target` with `algorithm`.
    ///
    /// # Errors
    ///
    /// [`EngineError::Unsorted`] if `algorithm` needs ascending input and
    /// `values` is not ascending. The run ends in
    /// [`RunPhase::RejectedPrecondition`] with no probe counted and no sink
    /// call made.
    pub fn run(
        &mut self,
        algorithm: SearchAlgorithm,
        values: &[i64],
        target: i64,
    ) -> Result<SearchReport> {
        let _span = tracing::debug_span!(
            "algoviz.run",
            engine = "search",
            algorithm = algorithm.key(),
            len = values.len(),
        )
        .entered();

        self.control.reset();

        if algorithm.requires_sorted() && !is_ascending(values) {
            self.control.finish(RunPhase::RejectedPrecondition);
            tracing::warn!(
                target: "algoviz.engine",
                algorithm = algorithm.key(),
                "search rejected: input is not ascending"
            );
            return Err(EngineError::Unsorted { algorithm });
        }

        let mut ctx = StepContext::new(&self.control, &mut self.sink, &mut self.pacer);
        let flow = match algorithm {
            SearchAlgorithm::Linear => linear::search(&mut ctx, values, target),
            SearchAlgorithm::Binary => binary::search(&mut ctx, values, target),
            SearchAlgorithm::Hash => hash::search(&mut ctx, values, target),
            SearchAlgorithm::Interpolation => interpolation::search(&mut ctx, values, target),
        };
        let pauses = ctx.pauses();

        let (outcome, phase) = match flow {
            Ok(Some(index)) => (SearchOutcome::Found(index), RunPhase::Completed),
            Ok(None) => (SearchOutcome::NotFound, RunPhase::Completed),
            Err(Interrupted) => (SearchOutcome::Cancelled, RunPhase::Cancelled),
        };
        self.control.finish(phase);

        let stats = self.control.stats();
        tracing::debug!(
            target: "algoviz.engine",
            algorithm = algorithm.key(),
            phase = phase.as_str(),
            comparisons = stats.comparisons,
            hash_operations = stats.hash_operations,
            outcome = ?outcome,
            pauses,
            "search finished"
        );

        Ok(SearchReport {
            algorithm,
            outcome,
            phase,
            stats,
        })
    }

    pub fn linear_search(
        &mut self,
        values: &[i64],
        target: i64,
    ) -> Result<SearchReport> {
        self.run(SearchAlgorithm::Linear, values, target)
    }

    pub fn binary_search(
        &mut self,
        values: &[i64],
        target: i64,
    ) -> Result<SearchReport> {
        self.run(SearchAlgorithm::Binary, values, target)
    }

    pub fn hash_search(
        &mut self,
        values: &[i64],
        target: i64,
    ) -> Result<SearchReport> {
        self.run(SearchAlgorithm::Hash, values, target)
    }

    pub fn interpolation_search(
        &mut self,
        values: &[i64],
        target: i64,
    ) -> Result<SearchReport> {
        self.run(SearchAlgorithm::Interpolation, values, target)
    }
}

impl<S, P> std::fmt::Debug for Searcher<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("control", &self.control)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::{Immediate, NullSink, RecordingSink};

    #[test]
    fn ascending_check_allows_duplicates() {
        assert!(is_ascending(&[]));
        assert!(is_ascending(&[1]));
        assert!(is_ascending(&[1, 1, 2]));
        assert!(!is_ascending(&[2, 1]));
    }

    #[test]
    fn every_algorithm_finds_a_unique_target() {
        let values = [1, 3, 5, 7, 9, 11];
        for algorithm in SearchAlgorithm::ALL {
            let mut searcher = Searcher::new(NullSink, Immediate);
            let report = searcher.run(algorithm, &values, 7).unwrap();
            assert_eq!(report.outcome, SearchOutcome::Found(3), "{algorithm}");
            assert_eq!(report.phase, RunPhase::Completed);
        }
    }

    #[test]
    fn rejection_is_silent_and_counts_nothing() {
        let mut searcher = Searcher::new(RecordingSink::new(), Immediate);
        for algorithm in [SearchAlgorithm::Binary, SearchAlgorithm::Interpolation] {
            let err = searcher.run(algorithm, &[3, 1, 2], 1).unwrap_err();
            assert_eq!(err, EngineError::Unsorted { algorithm });
            assert_eq!(searcher.phase(), RunPhase::RejectedPrecondition);
            assert_eq!(searcher.stats().comparisons, 0);
        }
        assert!(searcher.sink().events().is_empty());
    }

    #[test]
    fn order_free_searches_accept_unsorted_input() {
        let mut searcher = Searcher::new(NullSink, Immediate);
        let linear = searcher.linear_search(&[3, 1, 2], 1).unwrap();
        assert_eq!(linear.index(), Some(1));
        let hash = searcher.hash_search(&[3, 1, 2], 1).unwrap();
        assert_eq!(hash.index(), Some(1));
    }

    #[test]
    fn empty_input_is_not_found() {
        for algorithm in SearchAlgorithm::ALL {
            let mut searcher = Searcher::new(NullSink, Immediate);
            let report = searcher.run(algorithm, &[], 4).unwrap();
            assert_eq!(report.outcome, SearchOutcome::NotFound, "{algorithm}");
        }
    }

    #[test]
    fn stopping_from_the_pacer_cancels() {
        struct StopAtOnce;
        impl Pacer for StopAtOnce {
            fn pause(&mut self, _nominal: std::time::Duration, run: &RunHandle) {
                run.stop();
            }
        }

        let mut searcher = Searcher::new(NullSink, StopAtOnce);
        let report = searcher.linear_search(&[1, 2, 3], 3).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Cancelled);
        assert_eq!(report.phase, RunPhase::Cancelled);
        assert_eq!(report.index(), None);
        assert_eq!(report.stats.comparisons, 1);
    }
}
