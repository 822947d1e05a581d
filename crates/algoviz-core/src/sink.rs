#![forbid(unsafe_code)]

//! Visualization sink contract.
//!
//! A [`VisualSink`] is the capability an engine receives from whatever draws
//! the array. Calls are fire-and-forget: the engine never inspects a return
//! value, and a sink must not block for longer than it takes to record the
//! event.
//!
//! # Ordering
//!
//! Events reach the sink strictly in emission order. An engine emits a
//! `highlight` before every costly step and an `update_array` right after
//! every mutation, so a sink never observes a mutation that is not adjacent
//! to a highlight.

use crate::role::HighlightRole;

/// Consumer of visualization events.
pub trait VisualSink {
    /// Tag `indices` with `role`. Renderers clear previous tags first.
    fn highlight(&mut self, indices: &[usize], role: HighlightRole);

    /// Remove every tag.
    fn clear_highlights(&mut self);

    /// Replace the displayed values.
    fn update_array(&mut self, values: &[i64]);
}

impl<S: VisualSink + ?Sized> VisualSink for &mut S {
    fn highlight(&mut self, indices: &[usize], role: HighlightRole) {
        (**self).highlight(indices, role);
    }

    fn clear_highlights(&mut self) {
        (**self).clear_highlights();
    }

    fn update_array(&mut self, values: &[i64]) {
        (**self).update_array(values);
    }
}

impl<S: VisualSink + ?Sized> VisualSink for Box<S> {
    fn highlight(&mut self, indices: &[usize], role: HighlightRole) {
        (**self).highlight(indices, role);
    }

    fn clear_highlights(&mut self) {
        (**self).clear_highlights();
    }

    fn update_array(&mut self, values: &[i64]) {
        (**self).update_array(values);
    }
}

/// One sink call, captured as data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SinkEvent {
    Highlight {
        indices: Vec<usize>,
        role: HighlightRole,
    },
    ClearHighlights,
    UpdateArray {
        values: Vec<i64>,
    },
}

impl SinkEvent {
    /// Replay this event into another sink.
    pub fn apply_to(&self, sink: &mut dyn VisualSink) {
        match self {
            Self::Highlight { indices, role } => sink.highlight(indices, *role),
            Self::ClearHighlights => sink.clear_highlights(),
            Self::UpdateArray { values } => sink.update_array(values),
        }
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl VisualSink for NullSink {
    fn highlight(&mut self, _indices: &[usize], _role: HighlightRole) {}

    fn clear_highlights(&mut self) {}

    fn update_array(&mut self, _values: &[i64]) {}
}

/// Sink that keeps every event in order.
///
/// Used by tests to assert on event ordering and highlight scope without a
/// rendering surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the sink empty.
    pub fn take(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Index sets of every `highlight` call made with `role`.
    #[must_use]
    pub fn highlights(&self, role: HighlightRole) -> Vec<&[usize]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Highlight { indices, role: r } if *r == role => {
                    Some(indices.as_slice())
                }
                _ => None,
            })
            .collect()
    }

    /// The most recent `update_array` payload.
    #[must_use]
    pub fn last_array(&self) -> Option<&[i64]> {
        self.events.iter().rev().find_map(|event| match event {
            SinkEvent::UpdateArray { values } => Some(values.as_slice()),
            _ => None,
        })
    }

    /// Number of `update_array` calls.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SinkEvent::UpdateArray { .. }))
            .count()
    }
}

impl VisualSink for RecordingSink {
    fn highlight(&mut self, indices: &[usize], role: HighlightRole) {
        self.events.push(SinkEvent::Highlight {
            indices: indices.to_vec(),
            role,
        });
    }

    fn clear_highlights(&mut self) {
        self.events.push(SinkEvent::ClearHighlights);
    }

    fn update_array(&mut self, values: &[i64]) {
        self.events.push(SinkEvent::UpdateArray {
            values: values.to_vec(),
        });
    }
}
