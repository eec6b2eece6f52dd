// src/engine/state.rs

//! Pure per-tick decision core.
//!
//! [`BuildState`] is a synchronous, deterministic state machine that consumes
//! observed markers and decides what the IO shell should do on each tick. It
//! has no channels, no Tokio types, and performs no IO, so it can be
//! exhaustively unit tested without the filesystem or processes.

use crate::watch::{has_changed, Marker};

/// What the poll loop should do on a tick, given the observed marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// First observation: record the marker silently, dispatch nothing.
    Baseline,
    /// The target is newer than the last built marker: run the build action.
    Dispatch,
    /// Nothing changed.
    Idle,
}

/// The last marker for which a build was dispatched.
///
/// Lives in memory for the duration of one run. A forced-first-build start
/// seeds it with [`Marker::ZERO`], so the first observation of any real file
/// reads as a change; the default start leaves it unset and the first
/// observation establishes a silent baseline instead.
///
/// The stored marker is monotonically non-decreasing: [`BuildState::advance`]
/// never moves it backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildState {
    last: Option<Marker>,
}

impl BuildState {
    pub fn new(build_first: bool) -> Self {
        Self {
            last: build_first.then_some(Marker::ZERO),
        }
    }

    /// Decide what to do for the marker observed on this tick.
    ///
    /// Observing does not advance the stored marker; the caller advances only
    /// after the dispatched build has returned, via [`BuildState::advance`].
    pub fn observe(&mut self, current: Marker) -> Tick {
        match self.last {
            None => {
                self.last = Some(current);
                Tick::Baseline
            }
            Some(last) if has_changed(current, last) => Tick::Dispatch,
            Some(_) => Tick::Idle,
        }
    }

    /// Record that a build was dispatched for `marker`.
    ///
    /// Called after the build action has returned, regardless of its exit
    /// status. Markers older than the stored one are ignored.
    pub fn advance(&mut self, marker: Marker) {
        match self.last {
            Some(last) if marker <= last => {}
            _ => self.last = Some(marker),
        }
    }

    /// The last built (or baselined) marker, if any observation happened yet.
    pub fn last(&self) -> Option<Marker> {
        self.last
    }
}
