#![forbid(unsafe_code)]

//! Sink that forwards calls over an mpsc channel.

use std::sync::mpsc;

use algoviz_core::{HighlightRole, SinkEvent, VisualSink};

/// Sends each sink call as a [`SinkEvent`].
///
/// Sends never block and a dropped receiver is ignored: the engine must keep
/// stepping even when nobody is watching.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::Sender<SinkEvent>,
}

impl ChannelSink {
    #[must_use]
    pub fn new(sender: mpsc::Sender<SinkEvent>) -> Self {
        Self { sender }
    }

    /// Create a sink and the receiver its events arrive on.
    #[must_use]
    pub fn channel() -> (Self, mpsc::Receiver<SinkEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self::new(sender), receiver)
    }

    fn send(&self, event: SinkEvent) {
        let _ = self.sender.send(event);
    }
}

impl VisualSink for ChannelSink {
    fn highlight(&mut self, indices: &[usize], role: HighlightRole) {
        self.send(SinkEvent::Highlight {
            indices: indices.to_vec(),
            role,
        });
    }

    fn clear_highlights(&mut self) {
        self.send(SinkEvent::ClearHighlights);
    }

    fn update_array(&mut self, values: &[i64]) {
        self.send(SinkEvent::UpdateArray {
            values: values.to_vec(),
        });
    }
}
