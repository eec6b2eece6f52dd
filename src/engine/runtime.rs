// src/engine/runtime.rs

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::build::{BuildAction, BuildExecutor, BuildOutcome};
use crate::engine::state::{BuildState, Tick};
use crate::errors::Result;
use crate::watch::Detector;

/// The poll-loop runtime.
///
/// Drives detect → maybe-dispatch on a fixed cadence:
/// - each tick asks the [`Detector`] for the current marker,
/// - feeds it to the pure [`BuildState`] core,
/// - and on [`Tick::Dispatch`] runs the configured [`BuildAction`] through
///   the executor, awaiting it to completion before advancing state.
///
/// Dispatches therefore never overlap, and the loop may block for the whole
/// duration of a build. There is no timeout and no mid-build cancellation;
/// Ctrl-C during a build takes effect once the build returns.
pub struct Runtime<E: BuildExecutor> {
    detector: Detector,
    action: BuildAction,
    state: BuildState,
    executor: E,
    interval: Duration,
}

impl<E: BuildExecutor> Runtime<E> {
    pub fn new(
        detector: Detector,
        action: BuildAction,
        state: BuildState,
        executor: E,
        interval: Duration,
    ) -> Self {
        Self {
            detector,
            action,
            state,
            executor,
            interval,
        }
    }

    /// Perform one detect-and-maybe-dispatch step.
    ///
    /// Exposed so tests can drive the loop tick by tick without timers.
    pub async fn tick(&mut self) -> Result<()> {
        let current = self.detector.current_marker()?;

        match self.state.observe(current) {
            Tick::Baseline => {
                info!(marker = %current, "baseline established, watching for changes");
            }
            Tick::Idle => {
                debug!(marker = %current, "no change");
            }
            Tick::Dispatch => {
                info!(
                    file = %self.detector.target().file().display(),
                    action = %self.action,
                    marker = %current,
                    "change detected, running build"
                );

                let outcome = self
                    .executor
                    .dispatch(&self.action, self.detector.target())
                    .await?;

                if let BuildOutcome::Failed(code) = outcome {
                    // The marker still advances below: a failed build is
                    // retried on the next source change, not on the next tick.
                    debug!(exit_code = code, "build failed, advancing marker anyway");
                }

                self.state.advance(current);
            }
        }

        Ok(())
    }

    /// Main loop: tick at the configured interval until Ctrl-C.
    ///
    /// The process never exits on its own; a target-read error or a failure
    /// to spawn the build command propagates out and terminates the run.
    pub async fn run(mut self) -> Result<()> {
        info!(
            file = %self.detector.target().file().display(),
            action = %self.action,
            interval_secs = self.interval.as_secs(),
            "texwatch runtime started"
        );

        let mut ticker = tokio::time::interval(self.interval);
        // A slow build should not be followed by a burst of catch-up ticks.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await?;
                }
                res = &mut ctrl_c => {
                    res?;
                    info!("shutdown requested, stopping runtime");
                    return Ok(());
                }
            }
        }
    }

    /// The last built (or baselined) marker (for tests).
    pub fn last_marker(&self) -> Option<crate::watch::Marker> {
        self.state.last()
    }
}
