#![forbid(unsafe_code)]

//! The delay primitive.
//!
//! Engines never sleep themselves. At every suspension point they hand the
//! nominal delay of that step to a [`Pacer`] together with the run's
//! [`RunHandle`], then check `running` once the pacer returns. Keeping the
//! wait outside the algorithm lets the same procedure run instantly in
//! tests and at animation speed in a player.

use web_time::Duration;

use crate::config::PacingConfig;
use crate::control::RunHandle;

/// Suspends an engine between steps.
pub trait Pacer: Send {
    /// Suspend for (a scaled version of) `nominal`.
    ///
    /// Implementations should return early once `run` stops, so cancellation
    /// latency stays bounded by one pending delay.
    fn pause(&mut self, nominal: Duration, run: &RunHandle);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, nominal: Duration, run: &RunHandle) {
        (**self).pause(nominal, run);
    }
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pause(&mut self, nominal: Duration, run: &RunHandle) {
        (**self).pause(nominal, run);
    }
}

/// Pacer that never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Pacer for Immediate {
    fn pause(&mut self, _nominal: Duration, _run: &RunHandle) {}
}

/// Wall-clock pacer.
///
/// Waits on the run's stop signal, so a stop request wakes it immediately.
#[derive(Debug, Clone)]
pub struct RealTime {
    config: PacingConfig,
}

impl RealTime {
    #[must_use]
    pub fn new(config: PacingConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PacingConfig {
        &self.config
    }
}

impl Default for RealTime {
    fn default() -> Self {
        Self::new(PacingConfig::default())
    }
}

impl Pacer for RealTime {
    fn pause(&mut self, nominal: Duration, run: &RunHandle) {
        let scaled = self.config.scale(nominal);
        if scaled.is_zero() {
            return;
        }
        if run.wait_timeout(scaled) {
            tracing::trace!(
                target: "algoviz.pacer",
                nominal_ms = nominal.as_millis() as u64,
                "pause cut short by stop"
            );
        }
    }
}
