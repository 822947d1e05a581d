#![forbid(unsafe_code)]

//! Sorting engine.
//!
//! Every procedure sorts a caller-owned buffer in place and shares these
//! rules:
//!
//! 1. `comparisons` grows by one per value-vs-value test.
//! 2. `swaps` grows by one per element relocation (a swap, an adjacent
//!    shift, or a write during a merge). A position written with its own
//!    value is not a relocation.
//! 3. A `highlight` precedes every costly step and an `update_array`
//!    follows every mutation.
//! 4. Indices are tagged `sorted` once their final position is settled; a
//!    completed run ends by tagging the whole buffer.
//! 5. A cancelled run returns early and leaves a permutation of the input.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;
mod tim;

use algoviz_core::{
    HighlightRole, Pacer, PacingConfig, RunControl, RunHandle, RunPhase, RunStats, SortAlgorithm,
    VisualSink,
};

use crate::step::StepContext;

/// Outcome of one sorting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    /// [`RunPhase::Completed`] or [`RunPhase::Cancelled`].
    pub phase: RunPhase,
    pub stats: RunStats,
}

impl SortReport {
    #[must_use]
    pub fn completed(&self) -> bool {
        self.phase == RunPhase::Completed
    }
}

/// Sorting engine.
///
/// Owns its visualization sink, its pacer, and one [`RunControl`]. Runs take
/// `&mut self`, so two runs can never overlap on one instance; use
/// [`handle`](Self::handle) to stop a run or read its counters from another
/// thread.
pub struct Sorter<S, P> {
    sink: S,
    pacer: P,
    control: RunControl,
    min_run: usize,
}

impl<S: VisualSink, P: Pacer> Sorter<S, P> {
    #[must_use]
    pub fn new(sink: S, pacer: P) -> Self {
        Self {
            sink,
            pacer,
            control: RunControl::new(),
            min_run: algoviz_core::config::DEFAULT_MIN_RUN,
        }
    }

    /// Apply the engine-side parts of a pacing config (Tim run length).
    #[must_use]
    pub fn with_config(mut self, config: &PacingConfig) -> Self {
        self.min_run = config.min_run.max(1);
        self
    }

    #[must_use]
    pub fn handle(&self) -> RunHandle {
        self.control.handle()
    }

    /// Request a cooperative stop. A no-op when no run is active.
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

    /// Sort `buffer` in place with `algorithm`.
    ///
    /// Returns once the buffer is sorted or once a stop request has been
    /// observed. A cancelled buffer is a permutation of the input but not
    /// necessarily ordered.
    pub fn run(&mut self, algorithm: SortAlgorithm, buffer: &mut [i64]) -> SortReport {
        let _span = tracing::debug_span!(
            "algoviz.run",
            engine = "sort",
            algorithm = algorithm.key(),
            len = buffer.len(),
        )
        .entered();

        self.control.reset();
        let min_run = self.min_run;
        let mut ctx = StepContext::new(&self.control, &mut self.sink, &mut self.pacer);

        let flow = match algorithm {
            SortAlgorithm::Bubble => bubble::sort(&mut ctx, buffer),
            SortAlgorithm::Insertion => insertion::sort(&mut ctx, buffer),
            SortAlgorithm::Selection => selection::sort(&mut ctx, buffer),
            SortAlgorithm::Merge => merge::sort(&mut ctx, buffer),
            SortAlgorithm::Quick => quick::sort(&mut ctx, buffer),
            SortAlgorithm::Tim => tim::sort(&mut ctx, buffer, min_run),
        };

        let phase = match flow {
            Ok(()) => {
                ctx.highlight_all(buffer.len(), HighlightRole::Sorted);
                RunPhase::Completed
            }
            Err(_) => RunPhase::Cancelled,
        };
        let pauses = ctx.pauses();
        self.control.finish(phase);

        let stats = self.control.stats();
        tracing::debug!(
            target: "algoviz.engine",
            algorithm = algorithm.key(),
            phase = phase.as_str(),
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            pauses,
            "sort finished"
        );

        SortReport {
            algorithm,
            phase,
            stats,
        }
    }

    pub fn bubble_sort(&mut self, buffer: &mut [i64]) -> SortReport {
        self.run(SortAlgorithm::Bubble, buffer)
    }

    pub fn insertion_sort(&mut self, buffer: &mut [i64]) -> SortReport {
        self.run(SortAlgorithm::Insertion, buffer)
    }

    pub fn selection_sort(&mut self, buffer: &mut [i64]) -> SortReport {
        self.run(SortAlgorithm::Selection, buffer)
    }

    pub fn merge_sort(&mut self, buffer: &mut [i64]) -> SortReport {
        self.run(SortAlgorithm::Merge, buffer)
    }

    pub fn quick_sort(&mut self, buffer: &mut [i64]) -> SortReport {
        self.run(SortAlgorithm::Quick, buffer)
    }

    pub fn tim_sort(&mut self, buffer: &mut [i64]) -> SortReport {
        self.run(SortAlgorithm::Tim, buffer)
    }
}

impl<S, P> std::fmt::Debug for Sorter<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sorter")
            .field("control", &self.control)
            .field("min_run", &self.min_run)
            .finish_non_exhaustive()
    }
}
