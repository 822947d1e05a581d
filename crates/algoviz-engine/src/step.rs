#![forbid(unsafe_code)]

//! The step context every algorithm runs against.

use std::ops::RangeInclusive;
use std::time::Duration;

use algoviz_core::{HighlightRole, Pacer, RunControl, VisualSink};

/// Marker returned once a stop request has been observed.
///
/// Carrying it up with `?` is the only way an algorithm unwinds early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

/// Result of a step: `Err(Interrupted)` means "stop here".
pub type Flow<T = ()> = Result<T, Interrupted>;

/// Capabilities an algorithm gets for one run.
///
/// Bundles the run controller (counters and stop flag), the visualization
/// sink, and the pacer. Algorithms never touch any of them directly.
pub struct StepContext<'a> {
    control: &'a RunControl,
    sink: &'a mut dyn VisualSink,
    pacer: &'a mut dyn Pacer,
    pauses: u64,
}

impl<'a> StepContext<'a> {
    pub fn new(
        control: &'a RunControl,
        sink: &'a mut dyn VisualSink,
        pacer: &'a mut dyn Pacer,
    ) -> Self {
        Self {
            control,
            sink,
            pacer,
            pauses: 0,
        }
    }

    /// Succeeds while the run is still wanted.
    #[inline]
    pub fn checkpoint(&self) -> Flow {
        if self.control.is_running() {
            Ok(())
        } else {
            Err(Interrupted)
        }
    }

    /// Suspension point: hand `millis` to the pacer, then check for a stop.
    pub fn pause(&mut self, millis: u64) -> Flow {
        self.pauses += 1;
        self.pacer
            .pause(Duration::from_millis(millis), self.control.as_handle());
        self.checkpoint()
    }

    pub fn highlight(&mut self, indices: &[usize], role: HighlightRole) {
        self.sink.highlight(indices, role);
    }

    /// Highlight every index in `range`.
    pub fn highlight_range(&mut self, range: RangeInclusive<usize>, role: HighlightRole) {
        let indices: Vec<usize> = range.collect();
        self.sink.highlight(&indices, role);
    }

    /// Highlight indices `0..len`.
    pub fn highlight_all(&mut self, len: usize, role: HighlightRole) {
        let indices: Vec<usize> = (0..len).collect();
        self.sink.highlight(&indices, role);
    }

    pub fn clear_highlights(&mut self) {
        self.sink.clear_highlights();
    }

    /// Publish the buffer after a mutation.
    pub fn publish(&mut self, values: &[i64]) {
        self.sink.update_array(values);
    }

    /// Count one value-vs-value test (or search probe).
    #[inline]
    pub fn compared(&self) {
        self.control.count_comparison();
    }

    /// Count one element relocation.
    #[inline]
    pub fn relocated(&self) {
        self.control.count_swap();
    }

    pub fn record_hash_operations(&self, distinct_keys: usize) {
        self.control.set_hash_operations(distinct_keys as u64);
    }

    /// Suspension points passed so far in this run.
    #[must_use]
    pub fn pauses(&self) -> u64 {
        self.pauses
    }
}
