#![forbid(unsafe_code)]

//! The threaded player.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use algoviz_core::{
    EngineError, Immediate, Pacer, PacingConfig, RealTime, RunHandle, RunPhase, RunStats, SinkEvent,
};
use algoviz_engine::{Searcher, Sorter};

use crate::channel_sink::ChannelSink;
use crate::job::{Job, JobReport};

/// Pacer used on the worker thread.
///
/// A stop issued before the engine has reset its controller would be
/// overwritten by that reset, so the player also raises a job-local flag.
/// The flag is turned into a real stop at the next suspension point.
struct JobPacer {
    inner: Box<dyn Pacer>,
    stop_requested: Arc<AtomicBool>,
}

impl Pacer for JobPacer {
    fn pause(&mut self, nominal: Duration, run: &RunHandle) {
        if self.stop_requested.load(Ordering::Acquire) {
            run.stop();
        }
        self.inner.pause(nominal, run);
    }
}

struct ActiveJob {
    algorithm: &'static str,
    handle: RunHandle,
    stop_requested: Arc<AtomicBool>,
    thread: thread::JoinHandle<Result<JobReport, EngineError>>,
}

impl ActiveJob {
    fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.handle.stop();
    }
}

/// Runs one [`Job`] at a time on a background thread.
///
/// ```
/// use algoviz_core::{RunPhase, SortAlgorithm};
/// use algoviz_runtime::{Job, JobReport, Player};
///
/// let mut player = Player::instant();
/// player
///     .start(Job::Sort {
///         algorithm: SortAlgorithm::Merge,
///         values: vec![3, 1, 2],
///     })
///     .unwrap();
///
/// let Some(Ok(JobReport::Sorted { report, values })) = player.join() else {
///     panic!("sort job should finish");
/// };
/// assert_eq!(values, [1, 2, 3]);
/// assert_eq!(report.phase, RunPhase::Completed);
/// assert!(!player.drain_events().is_empty());
/// ```
pub struct Player {
    config: PacingConfig,
    instant: bool,
    events: mpsc::Receiver<SinkEvent>,
    active: Option<ActiveJob>,
    last: Option<RunHandle>,
}

impl Player {
    /// A player that paces every step in wall-clock time per `config`.
    #[must_use]
    pub fn new(config: PacingConfig) -> Self {
        Self::with_pacing(config, false)
    }

    /// A player whose jobs run without waiting.
    #[must_use]
    pub fn instant() -> Self {
        Self::with_pacing(PacingConfig::default(), true)
    }

    /// A player using `config`, pacing in wall-clock time unless `instant`.
    ///
    /// An instant player still applies the engine-side settings of `config`
    /// (the Tim run length).
    #[must_use]
    pub fn with_pacing(config: PacingConfig, instant: bool) -> Self {
        let (_, events) = mpsc::channel();
        Self {
            config,
            instant,
            events,
            active: None,
            last: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PacingConfig {
        &self.config
    }

    /// Start `job` on a worker thread.
    ///
    /// A finished job that was never joined is reaped first; its report is
    /// dropped, and so are any of its events not yet drained.
    ///
    /// # Errors
    ///
    /// [`EngineError::Busy`] if a job is still playing.
    pub fn start(&mut self, job: Job) -> Result<(), EngineError> {
        if let Some(active) = &self.active {
            if !active.thread.is_finished() {
                tracing::debug!(
                    target: "algoviz.runtime",
                    playing = active.algorithm,
                    requested = job.algorithm_key(),
                    "start refused: a job is still playing"
                );
                return Err(EngineError::Busy);
            }
            let _ = self.join();
        }

        let (sink, events) = ChannelSink::channel();
        let stop_requested = Arc::new(AtomicBool::new(false));
        let pacer = JobPacer {
            inner: self.make_pacer(),
            stop_requested: Arc::clone(&stop_requested),
        };
        let algorithm = job.algorithm_key();
        let len = job.values().len();

        let (handle, thread) = match job {
            Job::Sort {
                algorithm,
                mut values,
            } => {
                let mut sorter = Sorter::new(sink, pacer).with_config(&self.config);
                let handle = sorter.handle();
                let thread = thread::spawn(move || {
                    let report = sorter.run(algorithm, &mut values);
                    Ok::<_, EngineError>(JobReport::Sorted { report, values })
                });
                (handle, thread)
            }
            Job::Search {
                algorithm,
                values,
                target,
            } => {
                let mut searcher = Searcher::new(sink, pacer);
                let handle = searcher.handle();
                let thread = thread::spawn(move || {
                    searcher
                        .run(algorithm, &values, target)
                        .map(JobReport::Searched)
                });
                (handle, thread)
            }
        };

        tracing::debug!(
            target: "algoviz.runtime",
            algorithm,
            len,
            instant = self.instant,
            "job started"
        );

        self.events = events;
        self.last = Some(handle.clone());
        self.active = Some(ActiveJob {
            algorithm,
            handle,
            stop_requested,
            thread,
        });
        Ok(())
    }

    fn make_pacer(&self) -> Box<dyn Pacer> {
        if self.instant {
            Box::new(Immediate)
        } else {
            Box::new(RealTime::new(self.config.clone()))
        }
    }

    /// Ask the playing job to stop. A no-op when idle or already finished.
    pub fn stop(&self) {
        if let Some(active) = &self.active {
            tracing::debug!(
                target: "algoviz.runtime",
                algorithm = active.algorithm,
                "stop requested"
            );
            active.request_stop();
        }
    }

    /// Whether a job is still playing.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.thread.is_finished())
    }

    /// Counters of the current or most recent job.
    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.last.as_ref().map(RunHandle::stats).unwrap_or_default()
    }

    /// Phase of the current or most recent job.
    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.last.as_ref().map_or(RunPhase::Idle, RunHandle::phase)
    }

    /// All events emitted so far and not yet taken.
    pub fn drain_events(&self) -> Vec<SinkEvent> {
        self.events.try_iter().collect()
    }

    /// Wait up to `timeout` for the next event.
    pub fn recv_event_timeout(&self, timeout: Duration) -> Option<SinkEvent> {
        self.events.recv_timeout(timeout).ok()
    }

    /// Block until the job ends and return its report.
    ///
    /// Returns `None` when no job was started since the last join. Events
    /// stay queued and can still be drained afterwards.
    pub fn join(&mut self) -> Option<Result<JobReport, EngineError>> {
        let active = self.active.take()?;
        let algorithm = active.algorithm;
        let result = active
            .thread
            .join()
            .unwrap_or_else(|payload| {
                Err(EngineError::WorkerPanicked {
                    message: panic_message(payload.as_ref()),
                })
            });

        match &result {
            Ok(report) => tracing::debug!(
                target: "algoviz.runtime",
                algorithm,
                phase = report.phase().as_str(),
                "job joined"
            ),
            Err(err) => tracing::warn!(
                target: "algoviz.runtime",
                algorithm,
                error = %err,
                "job failed"
            ),
        }
        Some(result)
    }

    /// Stop and join any job, then forget its counters and events.
    pub fn reset(&mut self) {
        self.stop();
        let _ = self.join();
        self.last = None;
        let _ = self.drain_events();
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("config", &self.config)
            .field("instant", &self.instant)
            .field("busy", &self.is_busy())
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        // Don't join in drop; the worker exits at its next suspension point.
        self.stop();
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
