#![forbid(unsafe_code)]

//! Core: the contracts shared by every algoviz engine.
//!
//! # Role in algoviz
//! `algoviz-core` owns the pieces an animated algorithm run is built from,
//! without knowing any algorithm itself:
//!
//! - [`HighlightRole`]: presentation tag attached to a set of indices.
//! - [`VisualSink`]: the renderer-facing capability (`highlight`,
//!   `clear_highlights`, `update_array`), plus [`RecordingSink`],
//!   [`NullSink`], and the headless [`BarChart`].
//! - [`RunControl`] / [`RunHandle`]: the per-engine `running` flag,
//!   counters, and terminal phase, with cooperative stop.
//! - [`Pacer`]: the delay primitive. Engines suspend through it at every
//!   step boundary; [`Immediate`] skips the wait, [`RealTime`] sleeps and
//!   wakes early on stop.
//! - [`PacingConfig`]: tunables, optionally loaded from TOML/JSON.
//! - [`catalog`] and [`input`]: algorithm metadata and array parsing.
//!
//! # How it fits in the system
//! `algoviz-engine` writes the sorting and searching procedures against
//! these types. `algoviz-runtime` moves an engine onto a worker thread and
//! forwards sink events over a channel.

pub mod bar_chart;
pub mod catalog;
pub mod config;
pub mod control;
pub mod error;
pub mod input;
pub mod pacer;
pub mod role;
pub mod sink;

pub use bar_chart::BarChart;
pub use catalog::{AlgorithmInfo, SearchAlgorithm, SortAlgorithm, UnknownAlgorithm};
pub use config::{ConfigError, PacingConfig};
pub use control::{RunControl, RunHandle, RunPhase, RunStats};
pub use error::EngineError;
pub use input::{
    InputError, MAX_ARRAY_LEN, format_array, parse_array, parse_target, random_array,
};
pub use pacer::{Immediate, Pacer, RealTime};
pub use role::HighlightRole;
pub use sink::{NullSink, RecordingSink, SinkEvent, VisualSink};
