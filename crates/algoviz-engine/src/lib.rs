#![forbid(unsafe_code)]

//! Animated sorting and searching engines.
//!
//! # Role in algoviz
//! This crate holds the algorithms. Each one is an ordinary synchronous
//! function that drives a [`StepContext`]: it highlights indices, mutates
//! the buffer, publishes the new values, and suspends through the context's
//! pacer at every step boundary. The pacer decides how long a suspension
//! lasts; the algorithm only decides where suspensions are.
//!
//! - [`Sorter`]: bubble, insertion, selection, merge, quick, and Tim sort,
//!   in place over a caller-owned buffer.
//! - [`Searcher`]: linear, binary, hash-table, and interpolation search.
//!
//! # Cancellation
//! Every loop and every recursive call starts with a checkpoint, and every
//! pause is followed by one. Once a [`RunHandle`](algoviz_core::RunHandle)
//! stops the run, the next checkpoint returns [`Interrupted`] and the
//! algorithm unwinds by early return. A cancelled sort leaves the buffer a
//! permutation of its input.
//!
//! # Example
//!
//! ```
//! use algoviz_core::{Immediate, RecordingSink, RunPhase, SortAlgorithm};
//! use algoviz_engine::Sorter;
//!
//! let mut sorter = Sorter::new(RecordingSink::new(), Immediate);
//! let mut values = vec![5, 3, 8, 1, 9, 2];
//! let report = sorter.run(SortAlgorithm::Bubble, &mut values);
//!
//! assert_eq!(values, [1, 2, 3, 5, 8, 9]);
//! assert_eq!(report.phase, RunPhase::Completed);
//! assert_eq!(report.stats.comparisons, 15);
//! ```

pub mod searching;
pub mod sorting;
pub mod step;

pub use searching::{SearchOutcome, SearchReport, Searcher, is_ascending};
pub use sorting::{SortReport, Sorter};
pub use step::{Flow, Interrupted, StepContext};
