#![forbid(unsafe_code)]

//! Run control: the `running` flag, counters, and terminal phase of one
//! engine instance.
//!
//! [`RunControl`] is owned by an engine and drives the per-run state machine
//! (`Idle -> Running -> {Completed | Cancelled | RejectedPrecondition}`).
//! [`RunHandle`] is the cloneable, thread-safe view handed to everyone else:
//! it can read the counters at any time and request a cooperative stop.
//!
//! # Cancellation
//!
//! Stopping only clears the `running` flag and wakes any pending
//! [`RunHandle::wait_timeout`]. The algorithm observes the flag at its next
//! suspension point or loop boundary and unwinds by early return. Nothing is
//! interrupted preemptively.
//!
//! ```
//! use algoviz_core::control::{RunControl, RunPhase};
//!
//! let control = RunControl::new();
//! let handle = control.handle();
//!
//! control.reset();
//! assert!(handle.is_running());
//!
//! handle.stop();
//! assert!(!control.is_running());
//! control.finish(RunPhase::Cancelled);
//! assert_eq!(handle.phase(), RunPhase::Cancelled);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use web_time::{Duration, Instant};

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RunPhase {
    /// No run has started on this engine yet.
    #[default]
    Idle,
    /// A run is in flight.
    Running,
    /// The algorithm reached its natural end.
    Completed,
    /// A stop request was observed at a suspension point.
    Cancelled,
    /// An order-dependent search was given unsorted input. No probe ran.
    RejectedPrecondition,
}

impl RunPhase {
    /// Whether this phase ends a run.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Cancelled | Self::RejectedPrecondition
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::RejectedPrecondition => "rejected_precondition",
        }
    }

    const fn to_u8(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Running => 1,
            Self::Completed => 2,
            Self::Cancelled => 3,
            Self::RejectedPrecondition => 4,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Running,
            2 => Self::Completed,
            3 => Self::Cancelled,
            4 => Self::RejectedPrecondition,
            _ => Self::Idle,
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the counters of one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Value-vs-value tests (sorting) or probes (searching).
    pub comparisons: u64,
    /// Element relocations. Always 0 for searches.
    pub swaps: u64,
    /// Distinct keys in the hash index. Only hash search sets this.
    pub hash_operations: u64,
}

struct ControlInner {
    running: AtomicBool,
    phase: AtomicU8,
    comparisons: AtomicU64,
    swaps: AtomicU64,
    hash_operations: AtomicU64,
    notify: (Mutex<()>, Condvar),
}

/// Cloneable, thread-safe view of an engine's run state.
#[derive(Clone)]
pub struct RunHandle {
    inner: Arc<ControlInner>,
}

/// Engine-owned run controller.
///
/// Holds the only entry points that start, count, and finish a run. Hand out
/// [`RunHandle`]s for stopping and reading.
pub struct RunControl {
    handle: RunHandle,
}

impl RunControl {
    /// Create a controller in the [`RunPhase::Idle`] state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handle: RunHandle {
                inner: Arc::new(ControlInner {
                    running: AtomicBool::new(false),
                    phase: AtomicU8::new(RunPhase::Idle.to_u8()),
                    comparisons: AtomicU64::new(0),
                    swaps: AtomicU64::new(0),
                    hash_operations: AtomicU64::new(0),
                    notify: (Mutex::new(()), Condvar::new()),
                }),
            },
        }
    }

    /// A handle observing this controller.
    #[must_use]
    pub fn handle(&self) -> RunHandle {
        self.handle.clone()
    }

    /// Borrow the controller's own handle (for pacers).
    #[must_use]
    pub fn as_handle(&self) -> &RunHandle {
        &self.handle
    }

    /// Start a fresh run: zero the counters, set `running`, enter
    /// [`RunPhase::Running`].
    pub fn reset(&self) {
        let inner = &self.handle.inner;
        inner.comparisons.store(0, Ordering::Relaxed);
        inner.swaps.store(0, Ordering::Relaxed);
        inner.hash_operations.store(0, Ordering::Relaxed);
        inner
            .phase
            .store(RunPhase::Running.to_u8(), Ordering::Release);
        inner.running.store(true, Ordering::Release);
    }

    /// End the run in `phase` and clear `running`.
    pub fn finish(&self, phase: RunPhase) {
        debug_assert!(phase.is_terminal(), "finish() needs a terminal phase");
        let inner = &self.handle.inner;
        // Phase first: an observer that sees `running == false` also sees the
        // terminal phase.
        inner.phase.store(phase.to_u8(), Ordering::Release);
        inner.running.store(false, Ordering::Release);
    }

    pub fn count_comparison(&self) {
        self.handle.inner.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count_swap(&self) {
        self.handle.inner.swaps.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_hash_operations(&self, distinct_keys: u64) {
        self.handle
            .inner
            .hash_operations
            .store(distinct_keys, Ordering::Relaxed);
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.handle.stats()
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.handle.phase()
    }

    pub fn stop(&self) {
        self.handle.stop();
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RunControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunControl")
            .field("phase", &self.phase())
            .field("running", &self.is_running())
            .field("stats", &self.stats())
            .finish()
    }
}

impl RunHandle {
    /// Request a cooperative stop.
    ///
    /// Safe at any time: before a run starts the next `reset` overrides it,
    /// and after a run ends it changes nothing.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::Release);
        let (lock, cvar) = &self.inner.notify;
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        cvar.notify_all();
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        RunPhase::from_u8(self.inner.phase.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        RunStats {
            comparisons: self.inner.comparisons.load(Ordering::Relaxed),
            swaps: self.inner.swaps.load(Ordering::Relaxed),
            hash_operations: self.inner.hash_operations.load(Ordering::Relaxed),
        }
    }

    /// Block until `running` is cleared or the timeout elapses.
    ///
    /// Returns `true` if the run was stopped, `false` if the full duration
    /// passed.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        if !self.is_running() {
            return true;
        }
        let (lock, cvar) = &self.inner.notify;
        let mut guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        let start = Instant::now();
        let mut remaining = duration;
        loop {
            if !self.is_running() {
                return true;
            }
            let (new_guard, result) = cvar
                .wait_timeout(guard, remaining)
                .unwrap_or_else(|e| e.into_inner());
            guard = new_guard;
            if !self.is_running() {
                return true;
            }
            if result.timed_out() {
                return false;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            remaining = duration - elapsed;
        }
    }
}

impl fmt::Debug for RunHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunHandle")
            .field("phase", &self.phase())
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}
