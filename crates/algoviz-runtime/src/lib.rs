#![forbid(unsafe_code)]

//! Runtime: plays one algorithm run at a time on a worker thread.
//!
//! # Role in algoviz
//! The engines in `algoviz-engine` are synchronous. A [`Player`] moves one of
//! them onto a background thread with a real-time pacer, forwards every sink
//! call over a channel as a [`SinkEvent`](algoviz_core::SinkEvent), and
//! keeps a [`RunHandle`](algoviz_core::RunHandle) so the caller can stop
//! the run or poll its counters while it plays.
//!
//! Only one job runs per player. Starting a second one while the first is
//! still playing fails with [`EngineError::Busy`](algoviz_core::EngineError)
//! instead of queueing.

pub mod channel_sink;
pub mod job;
pub mod player;

pub use channel_sink::ChannelSink;
pub use job::{Job, JobReport};
pub use player::Player;
